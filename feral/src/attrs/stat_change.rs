use anyhow::{
    Error,
    Result,
};
use feral_data::Boost;

use crate::{
    attrs::hook_attr,
    battle::{
        Battle,
        Phase,
    },
    effect::{
        hook,
        HookContext,
        HookEffect,
    },
};

/// Prevents opponent-inflicted stat stage drops, either for all stats or a
/// protected subset.
pub struct ProtectStat {
    protected: Option<Vec<Boost>>,
}

hook_attr!(ProtectStat, PreStatStageChange, ProtectStat);

impl ProtectStat {
    /// Protects every stat.
    pub fn all() -> Self {
        Self { protected: None }
    }

    /// Protects only the given stats.
    pub fn only(protected: &[Boost]) -> Self {
        Self {
            protected: Some(protected.to_vec()),
        }
    }
}

impl HookEffect<hook::PreStatStageChange> for ProtectStat {
    fn eligible(
        &self,
        _battle: &Battle,
        _ctx: &HookContext,
        data: &hook::PreStatStageChange,
    ) -> bool {
        if data.self_inflicted || data.stages >= 0 {
            return false;
        }
        match (&self.protected, data.stat) {
            (None, _) => true,
            (Some(protected), Some(stat)) => protected.contains(&stat),
            // An all-stat drop is caught by any protection.
            (Some(_), None) => true,
        }
    }

    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::PreStatStageChange,
    ) -> Result<(), Error> {
        data.cancelled = true;
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        _data: &hook::PreStatStageChange,
    ) -> Option<String> {
        Some(format!(
            "{}'s {} prevents stat loss!",
            battle.combatant_name(ctx.owner),
            ctx.ability_name(),
        ))
    }
}

/// Reacts to opponent-inflicted stat drops with a stat change of the
/// owner's own.
pub struct StatStageChangeReaction {
    stats: Vec<Boost>,
    stages: i8,
}

hook_attr!(
    StatStageChangeReaction,
    PostStatStageChange,
    StatStageChangeReaction
);

impl StatStageChangeReaction {
    pub fn new(stats: &[Boost], stages: i8) -> Self {
        Self {
            stats: stats.to_vec(),
            stages,
        }
    }
}

impl HookEffect<hook::PostStatStageChange> for StatStageChangeReaction {
    fn eligible(
        &self,
        _battle: &Battle,
        _ctx: &HookContext,
        data: &hook::PostStatStageChange,
    ) -> bool {
        !data.self_inflicted && data.stages < 0
    }

    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        _data: &mut hook::PostStatStageChange,
    ) -> Result<(), Error> {
        if ctx.simulated {
            return Ok(());
        }
        battle.queue_mut().push_next(Phase::StatStageChange {
            target: ctx.owner,
            self_inflicted: true,
            stats: self.stats.clone(),
            stages: self.stages,
        });
        Ok(())
    }
}

/// Prevents intimidate-style stat drops entirely.
pub struct IntimidateImmunity;

hook_attr!(IntimidateImmunity, Intimidate, IntimidateImmunity);

impl HookEffect<hook::Intimidate> for IntimidateImmunity {
    fn commit(
        &self,
        _battle: &mut Battle,
        _ctx: &HookContext,
        data: &mut hook::Intimidate,
    ) -> Result<(), Error> {
        data.cancelled = true;
        Ok(())
    }

    fn trigger_message(
        &self,
        battle: &Battle,
        ctx: &HookContext,
        _data: &hook::Intimidate,
    ) -> Option<String> {
        Some(format!(
            "{}'s {} prevented it from being intimidated!",
            battle.combatant_name(ctx.owner),
            ctx.ability_name(),
        ))
    }
}

/// Reacts to being intimidated with a stat change, optionally overwriting
/// the incoming drop.
pub struct IntimidateReaction {
    stats: Vec<Boost>,
    stages: i8,
    overwrites: bool,
}

hook_attr!(IntimidateReaction, Intimidate, IntimidateReaction);

impl IntimidateReaction {
    pub fn new(stats: &[Boost], stages: i8) -> Self {
        Self {
            stats: stats.to_vec(),
            stages,
            overwrites: false,
        }
    }

    /// The reaction replaces the incoming drop instead of stacking with it.
    pub fn overwrites(mut self) -> Self {
        self.overwrites = true;
        self
    }
}

impl HookEffect<hook::Intimidate> for IntimidateReaction {
    fn commit(
        &self,
        battle: &mut Battle,
        ctx: &HookContext,
        data: &mut hook::Intimidate,
    ) -> Result<(), Error> {
        if !ctx.simulated {
            battle.queue_mut().push_next(Phase::StatStageChange {
                target: ctx.owner,
                self_inflicted: true,
                stats: self.stats.clone(),
                stages: self.stages,
            });
        }
        if self.overwrites {
            data.cancelled = true;
        }
        Ok(())
    }
}
