use anyhow::{
    Error,
    Result,
};
use feral_data::{
    BattlerTag,
    StatusEffect,
    Type,
};

use crate::{
    attrs::hook_attr,
    battle::{
        Battle,
        Phase,
    },
    effect::{
        hook,
        try_add_tag,
        HookContext,
        HookEffect,
    },
};

/// Traps grounded opponents, blocking switches and flight.
pub struct TrapOpponents;

hook_attr!(TrapOpponents, CheckTrapped, TrapOpponents);

impl HookEffect<hook::CheckTrapped> for TrapOpponents {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::CheckTrapped) -> bool {
        if data.target == ctx.owner {
            return false;
        }
        battle
            .combatant(data.target)
            .map(|target| target.is_grounded())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::CheckTrapped,
    ) -> Result<(), Error> {
        data.trapped = true;
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        _data: &hook::CheckTrapped,
    ) -> Option<String> {
        Some(format!(
            "{}'s {} prevents switching!",
            battle.combatant_name(ctx.owner),
            ctx.ability_name(),
        ))
    }
}

/// Redirects single-target moves of one type to the owner.
pub struct RedirectTypedMoves {
    move_type: Type,
}

hook_attr!(RedirectTypedMoves, RedirectMove, RedirectTypedMoves);

impl RedirectTypedMoves {
    pub fn new(move_type: Type) -> Self {
        Self { move_type }
    }
}

impl HookEffect<hook::RedirectMove> for RedirectTypedMoves {
    fn eligible(&self, _battle: &Battle, ctx: &HookContext, data: &hook::RedirectMove) -> bool {
        !data.mov.target.is_field_target()
            && data.mov.primary_type == self.move_type
            && data.source != ctx.owner
            && data.target != ctx.owner
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::RedirectMove,
    ) -> Result<(), Error> {
        data.target = ctx.owner;
        Ok(())
    }
}

/// Grants immunity to the given status effects.
pub struct StatusImmunity {
    statuses: Vec<StatusEffect>,
}

hook_attr!(StatusImmunity, PreSetStatus, StatusImmunity);

impl StatusImmunity {
    pub fn new(statuses: &[StatusEffect]) -> Self {
        Self {
            statuses: statuses.to_vec(),
        }
    }
}

impl HookEffect<hook::PreSetStatus> for StatusImmunity {
    fn eligible(&self, _battle: &Battle, _ctx: &HookContext, data: &hook::PreSetStatus) -> bool {
        self.statuses.contains(&data.status)
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::PreSetStatus,
    ) -> Result<(), Error> {
        data.cancelled = true;
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        data: &hook::PreSetStatus,
    ) -> Option<String> {
        Some(format!(
            "{}'s {} prevents {}!",
            battle.combatant_name(ctx.owner),
            ctx.ability_name(),
            data.status.describe(),
        ))
    }
}

/// Grants immunity to the given battler tags.
pub struct TagImmunity {
    tags: Vec<BattlerTag>,
}

hook_attr!(TagImmunity, PreApplyBattlerTag, TagImmunity);

impl TagImmunity {
    pub fn new(tags: &[BattlerTag]) -> Self {
        Self {
            tags: tags.to_vec(),
        }
    }
}

impl HookEffect<hook::PreApplyBattlerTag> for TagImmunity {
    fn eligible(
        &self,
        _battle: &Battle,
        _ctx: &HookContext,
        data: &hook::PreApplyBattlerTag,
    ) -> bool {
        self.tags.contains(&data.tag)
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::PreApplyBattlerTag,
    ) -> Result<(), Error> {
        data.cancelled = true;
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        data: &hook::PreApplyBattlerTag,
    ) -> Option<String> {
        Some(format!(
            "{}'s {} kept it free of {}!",
            battle.combatant_name(ctx.owner),
            ctx.ability_name(),
            data.tag,
        ))
    }
}

/// Copies dance moves used by other combatants.
pub struct CopyDanceMove;

hook_attr!(CopyDanceMove, PostMoveUsed, CopyDanceMove);

impl HookEffect<hook::PostMoveUsed> for CopyDanceMove {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, data: &hook::PostMoveUsed) -> bool {
        if data.user == ctx.owner || !data.mov.has_flag(feral_data::MoveFlag::Dance) {
            return false;
        }
        battle
            .combatant(ctx.owner)
            .map(|combatant| combatant.active() && !combatant.fainted())
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::PostMoveUsed,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.queue_mut().push_next(Phase::UseMove {
            user: ctx.owner,
            mov: data.mov.clone(),
            targets: data.targets.clone(),
        });
        Ok(())
    }
}

/// Attaches a battler tag when the owner loses its held item.
pub struct TagOnItemLoss {
    tag: BattlerTag,
}

hook_attr!(TagOnItemLoss, PostItemLost, TagOnItemLoss);

impl TagOnItemLoss {
    pub fn new(tag: BattlerTag) -> Self {
        Self { tag }
    }
}

impl HookEffect<hook::PostItemLost> for TagOnItemLoss {
    fn eligible(&self, battle: &Battle, ctx: &HookContext, _data: &hook::PostItemLost) -> bool {
        battle
            .combatant(ctx.owner)
            .map(|combatant| !combatant.has_tag(self.tag))
            .unwrap_or(false)
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostItemLost,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        try_add_tag(battle, ctx.dex, ctx.owner, self.tag, false);
        Ok(())
    }
}
