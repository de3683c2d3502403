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

//! Event subscriptions: the mechanism by which cards react to things that
//! happen during a game.
//!
//! A card's [crate::card_definition::CardDefinition] carries a list of
//! [EventSubscription]s. Whenever the rules engine announces an event, every
//! subscription of the matching kind whose lifetime predicate returns true is
//! invoked with the [Scope] describing its owner. Subscriptions are plain
//! data records — an event kind, a lifetime predicate, and a handler — so the
//! full set of reactions in a game can be enumerated by walking the board.

use std::fmt;
use std::fmt::Formatter;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::primitives::{PlayOrder, Side};

/// Kinds of game event a card can subscribe to.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum EventKind {
    /// The active player's turn has started (after mana refill and draw)
    TurnStart,
    /// The active player's turn is about to end
    TurnEnd,
    /// A minion has died and left the board
    MinionDied,
}

/// Identifies the minion which owns a subscription at dispatch time.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct Scope {
    /// Player controlling the subscribing minion
    pub side: Side,
    /// The subscribing minion's summon order, stable across board shifts
    pub summon_order: PlayOrder,
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.side, self.summon_order)
    }
}

/// Predicate deciding whether a subscription is still live. Returning false
/// permanently silences the subscription for this dispatch.
pub type LifetimeFn = fn(&GameState, Scope) -> bool;

/// Function invoked when a subscribed event fires.
pub type EventHandlerFn = fn(&mut GameState, Scope) -> Result<()>;

/// One card reaction: `(event kind, lifetime predicate, handler)`.
#[derive(Copy, Clone)]
pub struct EventSubscription {
    pub kind: EventKind,
    pub lifetime: LifetimeFn,
    pub handler: EventHandlerFn,
}

impl EventSubscription {
    pub fn new(kind: EventKind, lifetime: LifetimeFn, handler: EventHandlerFn) -> Self {
        Self { kind, lifetime, handler }
    }
}

impl fmt::Debug for EventSubscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "EventSubscription({:?})", self.kind)
    }
}

/// Standard lifetime predicate: the subscription is live while its owner
/// remains on the board.
pub fn while_on_board(game: &GameState, scope: Scope) -> bool {
    game.player(scope.side).minions.iter().any(|m| m.summon_order == scope.summon_order)
}
