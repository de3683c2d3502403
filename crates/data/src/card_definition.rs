// Copyright © Emberfall 2022-present

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//    https://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Data structures for defining card rules -- the parts of a card which do
//! not vary from game to game.
//!
//! Card behavior is expressed entirely through data: printed stats plus
//! function values for the play effect, targeting predicate, deathrattle,
//! and event subscriptions. There is no per-card type; adding a card means
//! adding one [CardDefinition] record to the catalog.

use std::fmt::Debug;

use anyhow::Result;

use crate::card_name::CardName;
use crate::events::EventSubscription;
use crate::game::GameState;
use crate::primitives::{AttackValue, DurabilityValue, HealthValue, ManaValue, Side, TargetId};
use crate::sources::RandomSource;

/// Possible types of cards
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum CardType {
    Minion,
    Spell,
    Weapon,
}

/// Printed statistics for a minion card
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct MinionStats {
    pub attack: AttackValue,
    pub health: HealthValue,
    pub taunt: bool,
    /// Charge minions can attack the turn they are played
    pub charge: bool,
}

/// Printed statistics for a weapon card
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct WeaponStats {
    pub attack: AttackValue,
    pub durability: DurabilityValue,
}

/// Context handed to a card's play effect: who played the card and which
/// choices accompanied it.
#[derive(Debug, Clone, Copy)]
pub struct EffectContext {
    /// Player who played the card
    pub side: Side,
    /// Target selected via the card's targeting predicate, if any
    pub target: Option<TargetId>,
    /// Selected choose-one option index, if the card offers options
    pub option: Option<usize>,
}

/// Predicate restricting which characters a card may target. Cards with a
/// predicate request a `SpecifiedTarget` parameter when at least one legal
/// target exists; with none, the card resolves untargeted.
pub type TargetPredicate = fn(&GameState, Side, TargetId) -> bool;

/// Effect resolved when the card is played: a spell's effect, or a minion's
/// battlecry (invoked after the minion is on the board). Receives the random
/// source so effects with rules-determined outcomes stay reproducible.
pub type PlayEffectFn = fn(&mut GameState, EffectContext, &mut dyn RandomSource) -> Result<()>;

/// Effect resolved when a minion dies, after it has left the board.
pub type DeathrattleFn = fn(&mut GameState, Side) -> Result<()>;

/// One option of a choose-one card.
#[derive(Debug)]
pub struct ChooseOneOption {
    /// Short rules text, used in logs and by interactive frontends
    pub text: &'static str,
}

/// The fundamental object defining the behavior of a given card in Emberfall
///
/// This struct's top-level fields should be universal properties which need
/// to be set by every card
pub struct CardDefinition {
    pub name: CardName,
    pub cost: ManaValue,
    pub card_type: CardType,
    pub minion: Option<MinionStats>,
    pub weapon: Option<WeaponStats>,
    /// Choose-one options; empty for cards without a choice
    pub choose_one: Vec<ChooseOneOption>,
    pub target_predicate: Option<TargetPredicate>,
    pub on_play: Option<PlayEffectFn>,
    pub deathrattle: Option<DeathrattleFn>,
    pub subscriptions: Vec<EventSubscription>,
}

impl CardDefinition {
    /// Printed minion stats. Panics if invoked for a non-minion card; callers
    /// check [Self::card_type] first.
    pub fn minion_stats(&self) -> &MinionStats {
        self.minion.as_ref().expect("minion stats")
    }

    /// Printed weapon stats. Panics if invoked for a non-weapon card.
    pub fn weapon_stats(&self) -> &WeaponStats {
        self.weapon.as_ref().expect("weapon stats")
    }
}

impl Debug for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDefinition")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .field("card_type", &self.card_type)
            .finish()
    }
}
