use feral_data::{
    BattlerTag,
    StatusEffect,
};

use crate::{
    abilities::AbilitySlot,
    battle::{
        Battle,
        CombatantHandle,
    },
    dex::AbilityDex,
    effect::{
        Attribute,
        HookContext,
        HookData,
        Payload,
        hook,
    },
};

/// A filter over attributes, for partial re-dispatches such as mid-battle
/// ability changes.
pub type AttributeFilter = dyn Fn(&Attribute) -> bool;

/// Runs a hook dispatch for the given payload.
///
/// If the payload's passive-selector is unset, the full algorithm runs once
/// for the active slot and once for the passive slot, and the selector is
/// restored to unset before returning, so callers may reuse one payload
/// instance across many hooks.
pub fn run_hook<T: HookData>(battle: &mut Battle, dex: &AbilityDex, payload: &mut Payload<T>) {
    run_hook_internal(battle, dex, payload, None)
}

/// Runs a hook dispatch limited to attributes accepted by the filter.
pub fn run_hook_filtered<T: HookData>(
    battle: &mut Battle,
    dex: &AbilityDex,
    payload: &mut Payload<T>,
    filter: &AttributeFilter,
) {
    run_hook_internal(battle, dex, payload, Some(filter))
}

fn run_hook_internal<T: HookData>(
    battle: &mut Battle,
    dex: &AbilityDex,
    payload: &mut Payload<T>,
    filter: Option<&AttributeFilter>,
) {
    // The effect source may have already left the field.
    let Some(owner) = payload.combatant else {
        return;
    };
    match payload.slot {
        Some(slot) => run_hook_for_slot(battle, dex, owner, slot, payload, filter),
        None => {
            for slot in [AbilitySlot::Active, AbilitySlot::Passive] {
                payload.slot = Some(slot);
                run_hook_for_slot(battle, dex, owner, slot, payload, filter);
            }
            payload.slot = None;
        }
    }
}

fn run_hook_for_slot<T: HookData>(
    battle: &mut Battle,
    dex: &AbilityDex,
    owner: CombatantHandle,
    slot: AbilitySlot,
    payload: &mut Payload<T>,
    filter: Option<&AttributeFilter>,
) {
    let ability_id = {
        let Ok(combatant) = battle.combatant(owner) else {
            return;
        };
        // An identical passive never applies twice.
        if slot == AbilitySlot::Passive
            && combatant
                .passive_ability()
                .is_some_and(|passive| passive == combatant.active_ability())
        {
            return;
        }
        match combatant.ability_in_slot(slot) {
            Some(ability_id) => ability_id,
            None => return,
        }
    };
    if !can_apply_ability(battle, dex, owner, slot) {
        return;
    }

    let ability = dex.ability(ability_id);
    for attribute in ability.attributes() {
        if attribute.hook() != Some(T::HOOK) {
            continue;
        }
        if let Some(filter) = filter {
            if !filter(attribute) {
                continue;
            }
        }
        // Gating order: ability-level conditions, then the attribute's own
        // condition, then the effect's eligibility query. First failure
        // short-circuits with zero side effects.
        if ability
            .conditions()
            .iter()
            .any(|condition| !condition.check(battle, owner))
        {
            continue;
        }
        if let Some(condition) = attribute.condition() {
            if !condition.check(battle, owner) {
                continue;
            }
        }
        let Some(effect) = T::effect_of(attribute.effect()) else {
            continue;
        };
        let ctx = HookContext {
            dex,
            owner,
            ability: ability_id,
            slot,
            simulated: payload.simulated,
        };
        if !effect.eligible(battle, &ctx, &payload.data) {
            continue;
        }

        battle.queue_mut().set_splice();
        if attribute.shows_ability() && !payload.simulated {
            battle.show_ability_start(owner, slot, ability_id);
        }
        if let Some(message) = effect.trigger_message(battle, &ctx, &payload.data) {
            if !payload.simulated {
                battle.log_message(&message);
            }
            payload.messages.push(message);
        }
        if let Err(error) = effect.commit(battle, &ctx, &mut payload.data) {
            // One misbehaving attribute must not take its siblings down.
            battle.debug_event_failure(T::HOOK, ability_id, &error);
        }
        if attribute.shows_ability() && !payload.simulated {
            battle.show_ability_end(owner, slot, ability_id);
        }
        if !payload.simulated {
            if let Ok(combatant) = battle.combatant_mut(owner) {
                combatant.record_applied_ability(ability_id);
            }
        }
        battle.queue_mut().clear_splice();
    }
}

/// Whether the ability in the given slot can currently apply effects.
///
/// Checks slot presence, field-wide ability negation, suppression, and the
/// faint gate. Ability-level conditions are evaluated per attribute by the
/// dispatcher, not here.
pub fn can_apply_ability(
    battle: &Battle,
    dex: &AbilityDex,
    combatant: CombatantHandle,
    slot: AbilitySlot,
) -> bool {
    let Ok(combatant) = battle.combatant(combatant) else {
        return false;
    };
    let Some(ability_id) = combatant.ability_in_slot(slot) else {
        return false;
    };
    let ability = dex.ability(ability_id);
    if battle.field().abilities_ignored() && ability.flags().ignorable {
        return false;
    }
    if combatant.ability_suppressed() && !ability.flags().unsuppressible {
        return false;
    }
    if combatant.fainted() && !ability.flags().bypass_faint {
        return false;
    }
    true
}

/// Re-fires switch-in effects after a combatant gains an ability
/// mid-battle (copy, swap, transform, suppression lift).
///
/// Only [`PostSummon`][`hook::PostSummon`] attributes marked
/// activates-on-gain fire, and never form-change triggers, which would
/// otherwise re-trigger themselves through the form change.
pub fn ability_gained(battle: &mut Battle, dex: &AbilityDex, combatant: CombatantHandle, slot: AbilitySlot) {
    let mut payload = Payload::new(combatant, hook::PostSummon).for_slot(slot);
    run_hook_filtered(battle, dex, &mut payload, &|attribute| {
        attribute.activates_on_gain() && !attribute.is_form_trigger()
    });
}

/// Fires leaving-field effects when a combatant loses an ability
/// mid-battle.
///
/// Call while the ability is still in place, so its teardown attributes
/// can run.
pub fn ability_lost(battle: &mut Battle, dex: &AbilityDex, combatant: CombatantHandle, slot: AbilitySlot) {
    let mut payload = Payload::new(combatant, hook::PreLeaveField).for_slot(slot);
    run_hook(battle, dex, &mut payload);
}

/// Fires illusion-breaking effects when a combatant's ability is
/// suppressed without leaving the field.
///
/// Call before the suppression flag takes effect, so the suppressed
/// ability can still run its teardown.
pub fn ability_suppressed(
    battle: &mut Battle,
    dex: &AbilityDex,
    combatant: CombatantHandle,
    slot: AbilitySlot,
) {
    let mut payload = Payload::new(combatant, hook::PreLeaveField).for_slot(slot);
    run_hook_filtered(battle, dex, &mut payload, &|attribute| {
        attribute.does_break_illusion()
    });
}

/// Re-dispatches switch-in effects after a form change, comparing the
/// (active, passive) ability pair before and after and touching only the
/// slots that actually differ.
pub fn ability_changed(
    battle: &mut Battle,
    dex: &AbilityDex,
    combatant: CombatantHandle,
    before_active: feral_data::AbilityId,
    before_passive: Option<feral_data::AbilityId>,
) {
    let (after_active, after_passive) = {
        let Ok(combatant) = battle.combatant(combatant) else {
            return;
        };
        (combatant.active_ability(), combatant.passive_ability())
    };
    if after_active != before_active {
        ability_gained(battle, dex, combatant, AbilitySlot::Active);
    }
    if after_passive != before_passive && after_passive.is_some() {
        ability_gained(battle, dex, combatant, AbilitySlot::Passive);
    }
}

/// Attempts to set a status on the target, running the target's status
/// immunity attributes first.
///
/// Returns whether the status would be (or was) applied. In simulated mode
/// no state changes; the return value is the AI-visible estimate.
pub fn try_set_status(
    battle: &mut Battle,
    dex: &AbilityDex,
    target: CombatantHandle,
    status: StatusEffect,
    source: Option<CombatantHandle>,
    simulated: bool,
) -> bool {
    {
        let Ok(combatant) = battle.combatant(target) else {
            return false;
        };
        if combatant.fainted() || combatant.status().is_some() {
            return false;
        }
    }
    let mut payload = Payload::new(
        target,
        hook::PreSetStatus {
            status,
            source,
            cancelled: false,
        },
    );
    if simulated {
        payload = payload.simulated();
    }
    run_hook(battle, dex, &mut payload);
    if payload.data.cancelled {
        return false;
    }
    if !simulated {
        if battle.set_status(target, status).is_err() {
            return false;
        }
    }
    true
}

/// Attempts to add a battler tag to the target, running the target's tag
/// immunity attributes first.
///
/// Returns whether the tag would be (or was) added.
pub fn try_add_tag(
    battle: &mut Battle,
    dex: &AbilityDex,
    target: CombatantHandle,
    tag: BattlerTag,
    simulated: bool,
) -> bool {
    {
        let Ok(combatant) = battle.combatant(target) else {
            return false;
        };
        if combatant.fainted() || combatant.has_tag(tag) {
            return false;
        }
    }
    let mut payload = Payload::new(
        target,
        hook::PreApplyBattlerTag {
            tag,
            cancelled: false,
        },
    );
    if simulated {
        payload = payload.simulated();
    }
    run_hook(battle, dex, &mut payload);
    if payload.data.cancelled {
        return false;
    }
    if !simulated {
        match battle.combatant_mut(target) {
            Ok(combatant) => {
                combatant.add_tag(tag);
            }
            Err(_) => return false,
        }
    }
    true
}
