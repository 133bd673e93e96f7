use anyhow::{
    Error,
    Result,
};
use feral_data::{
    AbilityId,
    StatusEffect,
    Terrain,
    Weather,
};
use feral_prng::{
    BattleRng,
    LinearCongruentialRng,
};

use crate::{
    abilities::AbilitySlot,
    battle::{
        BattleOptions,
        Combatant,
        CombatantData,
        CombatantHandle,
        Field,
        Phase,
        PhaseQueue,
    },
    battle_event,
    error::WrapOptionError,
    log::EventLog,
};

/// The mutable state of one battle: combatants, field, phase queue, RNG
/// stream, and event log.
///
/// This is the context object handed to every attribute's eligibility and
/// commit call. Eligibility receives it immutably, which statically
/// guarantees that speculative queries cannot mutate state or advance the
/// RNG stream.
pub struct Battle {
    options: BattleOptions,
    field: Field,
    queue: PhaseQueue,
    log: EventLog,
    rng: Box<dyn BattleRng>,
    combatants: Vec<Combatant>,
}

impl Battle {
    /// Creates a new battle.
    pub fn new(options: BattleOptions) -> Self {
        let rng = Box::new(LinearCongruentialRng::new(options.seed));
        Self::new_with_rng(options, rng)
    }

    /// Creates a new battle with the given RNG stream.
    pub fn new_with_rng(options: BattleOptions, rng: Box<dyn BattleRng>) -> Self {
        Self {
            options,
            field: Field::new(),
            queue: PhaseQueue::new(),
            log: EventLog::new(),
            rng,
            combatants: Vec::new(),
        }
    }

    /// The options the battle was created with.
    pub fn options(&self) -> &BattleOptions {
        &self.options
    }

    /// Registers a new combatant on the given side.
    pub fn join(&mut self, side: usize, data: CombatantData) -> CombatantHandle {
        let handle = CombatantHandle(self.combatants.len());
        self.combatants.push(Combatant::new(data, side));
        handle
    }

    /// The combatant behind the given handle.
    pub fn combatant(&self, handle: CombatantHandle) -> Result<&Combatant, Error> {
        self.combatants
            .get(handle.0)
            .wrap_not_found_error(format!("combatant {handle}"))
    }

    /// The combatant behind the given handle, mutably.
    pub fn combatant_mut(&mut self, handle: CombatantHandle) -> Result<&mut Combatant, Error> {
        self.combatants
            .get_mut(handle.0)
            .wrap_not_found_error(format!("combatant {handle}"))
    }

    /// The display name of the given combatant, for log entries.
    pub fn combatant_name(&self, handle: CombatantHandle) -> String {
        self.combatant(handle)
            .map(|combatant| combatant.name.clone())
            .unwrap_or_default()
    }

    /// Handles of all active combatants, in registration order.
    pub fn all_active(&self) -> Vec<CombatantHandle> {
        self.combatants
            .iter()
            .enumerate()
            .filter(|(_, combatant)| combatant.active() && !combatant.fainted())
            .map(|(index, _)| CombatantHandle(index))
            .collect()
    }

    /// Handles of all active opponents of the given combatant.
    pub fn active_foes(&self, handle: CombatantHandle) -> Vec<CombatantHandle> {
        let Ok(combatant) = self.combatant(handle) else {
            return Vec::new();
        };
        let side = combatant.side();
        self.combatants
            .iter()
            .enumerate()
            .filter(|(_, other)| other.active() && !other.fainted() && other.side() != side)
            .map(|(index, _)| CombatantHandle(index))
            .collect()
    }

    /// Handles of all active allies of the given combatant, excluding
    /// itself.
    pub fn active_allies(&self, handle: CombatantHandle) -> Vec<CombatantHandle> {
        let Ok(combatant) = self.combatant(handle) else {
            return Vec::new();
        };
        let side = combatant.side();
        self.combatants
            .iter()
            .enumerate()
            .filter(|(index, other)| {
                other.active() && !other.fainted() && other.side() == side && *index != handle.0
            })
            .map(|(index, _)| CombatantHandle(index))
            .collect()
    }

    /// The battlefield state.
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Sets the weather, logging the change. Returns whether the weather
    /// changed.
    pub fn set_weather(&mut self, weather: Weather) -> bool {
        if !self.field.set_weather(weather) {
            return false;
        }
        self.log.push(battle_event!("weather", weather));
        true
    }

    /// Clears the weather, logging the change.
    ///
    /// If `expected` is given, the weather is only cleared when it matches.
    pub fn clear_weather(&mut self, expected: Option<Weather>) -> bool {
        if !self.field.clear_weather(expected) {
            return false;
        }
        self.log.push(battle_event!("clearweather"));
        true
    }

    /// Sets the terrain, logging the change. Returns whether the terrain
    /// changed.
    pub fn set_terrain(&mut self, terrain: Terrain) -> bool {
        if !self.field.set_terrain(terrain) {
            return false;
        }
        self.log.push(battle_event!("terrain", terrain));
        true
    }

    /// The phase queue.
    pub fn queue(&self) -> &PhaseQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut PhaseQueue {
        &mut self.queue
    }

    /// The event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// Adds a user-facing message to the event log.
    pub fn log_message(&mut self, message: &str) {
        self.log.push_message(message);
    }

    /// The battle's RNG stream.
    pub fn rng_mut(&mut self) -> &mut dyn BattleRng {
        self.rng.as_mut()
    }

    /// Deals direct damage to a combatant, logging the result.
    ///
    /// Returns the amount of damage actually dealt. Used for inline
    /// counter-effects (contact recoil); visible, time-ordered damage should
    /// enqueue a phase instead.
    pub fn deal_damage(&mut self, target: CombatantHandle, amount: u16) -> Result<u16, Error> {
        let combatant = self.combatant_mut(target)?;
        let dealt = combatant.apply_damage(amount);
        let (hp, max_hp, name) = (combatant.hp(), combatant.max_hp(), combatant.name.clone());
        self.log.push(battle_event!(
            "damage",
            format!("mon:{name}"),
            format!("health:{hp}/{max_hp}")
        ));
        if hp == 0 {
            self.log.push(battle_event!("faint", format!("mon:{name}")));
        }
        Ok(dealt)
    }

    /// Heals a combatant directly, logging the result.
    pub fn heal(&mut self, target: CombatantHandle, amount: u16) -> Result<u16, Error> {
        let combatant = self.combatant_mut(target)?;
        let healed = combatant.apply_heal(amount);
        let (hp, max_hp, name) = (combatant.hp(), combatant.max_hp(), combatant.name.clone());
        self.log.push(battle_event!(
            "heal",
            format!("mon:{name}"),
            format!("health:{hp}/{max_hp}")
        ));
        Ok(healed)
    }

    /// Sets a combatant's status directly, logging the result.
    ///
    /// Immunity checks live in the dispatcher
    /// ([`try_set_status`][`crate::effect::try_set_status`]); this method
    /// only applies and records the status.
    pub fn set_status(&mut self, target: CombatantHandle, status: StatusEffect) -> Result<(), Error> {
        let combatant = self.combatant_mut(target)?;
        combatant.set_status(status);
        let name = combatant.name.clone();
        self.log.push(battle_event!(
            "status",
            format!("mon:{name}"),
            format!("status:{status}")
        ));
        Ok(())
    }

    /// Cures a combatant's status, logging the result.
    pub fn cure_status(&mut self, target: CombatantHandle) -> Result<Option<StatusEffect>, Error> {
        let combatant = self.combatant_mut(target)?;
        let cured = combatant.cure_status();
        if let Some(status) = cured {
            let name = combatant.name.clone();
            self.log.push(battle_event!(
                "curestatus",
                format!("mon:{name}"),
                format!("status:{status}")
            ));
        }
        Ok(cured)
    }

    /// Signals that an ability is activating: a UI phase plus a log event.
    pub fn show_ability_start(&mut self, combatant: CombatantHandle, slot: AbilitySlot, ability: AbilityId) {
        let name = self.combatant_name(combatant);
        self.log.push(battle_event!(
            "activate",
            format!("mon:{name}"),
            format!("ability:{}", ability.name())
        ));
        self.queue.push_next(Phase::ShowAbility { combatant, slot });
    }

    /// Signals that an activating ability has resolved.
    pub fn show_ability_end(&mut self, combatant: CombatantHandle, _slot: AbilitySlot, _ability: AbilityId) {
        let name = self.combatant_name(combatant);
        self.log
            .push(battle_event!("abilityend", format!("mon:{name}")));
    }

    /// Records a non-fatal attribute failure in the log and moves on.
    pub fn debug_event_failure(&mut self, hook: impl std::fmt::Display, ability: AbilityId, error: &Error) {
        self.log.push(battle_event!(
            "debug",
            format!("hook:{hook}"),
            format!("ability:{}", ability.name()),
            format!("error:{error:#}")
        ));
    }

    /// Starts a new battle: resets all per-battle combatant state.
    ///
    /// Once-per-battle bookkeeping is cleared here and nowhere else.
    pub fn start_battle(&mut self) {
        for combatant in &mut self.combatants {
            combatant.reset_battle_data();
        }
        self.log.push(battle_event!("battlestart"));
    }
}
