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

//! Event dispatch over card subscriptions. See `data::events` for the
//! subscription model.

use anyhow::Result;
use data::events::{EventKind, EventSubscription, Scope};
use data::game::GameState;
use data::primitives::Side;
use enum_iterator::all;
use tracing::debug;

/// Announces a game event, invoking every live subscription of the matching
/// kind in summon order.
///
/// The subscription list is snapshotted before any handler runs; a handler
/// which summons or kills minions does not change which subscriptions this
/// dispatch invokes. Each subscription's lifetime predicate is re-checked
/// immediately before its handler runs, so a subscriber killed by an earlier
/// handler stays silent.
pub fn fire_event(game: &mut GameState, kind: EventKind) -> Result<()> {
    debug!(?kind, "fire_event");
    let mut subscriptions: Vec<(Scope, EventSubscription)> = Vec::new();
    for side in all::<Side>() {
        for minion in &game.player(side).minions {
            let scope = Scope { side, summon_order: minion.summon_order };
            subscriptions.extend(
                crate::get(minion.name)
                    .subscriptions
                    .iter()
                    .filter(|s| s.kind == kind)
                    .map(|s| (scope, *s)),
            );
        }
    }
    subscriptions.sort_by_key(|(scope, _)| scope.summon_order);

    for (scope, subscription) in subscriptions {
        if (subscription.lifetime)(game, scope) {
            (subscription.handler)(game, scope)?;
        }
    }
    Ok(())
}
