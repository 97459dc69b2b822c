//! デモ用のカードゲーム Action
//!
//! 各 Action は共有の `Table` を更新することで結果を伝える。
//! レジストリ側は戻り値として何も受け取らない。

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use actionstore_core::{ActionError, ActionStoreBuilder, RegistryError, TypedAction};
use tracing::info;

pub const MIN_PLAYERS: u32 = 2;
pub const MAX_PLAYERS: u32 = 6;

const SUITS: [char; 4] = ['S', 'H', 'D', 'C'];
const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    rank: u8,
    suit: u8,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANKS[self.rank as usize], SUITS[self.suit as usize]
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Default)]
pub struct Table {
    phase: Phase,
    deck: Vec<Card>,
    hands: Vec<Vec<Card>>,
}

impl Table {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn summary(&self) -> String {
        let hands: Vec<usize> = self.hands.iter().map(Vec::len).collect();
        format!(
            "phase={:?} deck={} hands={:?}",
            self.phase(),
            self.deck_len(),
            hands
        )
    }

    fn start(&mut self, players: u32) -> Result<(), ActionError> {
        if self.phase == Phase::Running {
            return Err(ActionError::rejected("a game is already running"));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(ActionError::InvalidArgument {
                index: 0,
                reason: format!("players must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {players}"),
            });
        }

        // Top of the deck is the end of the vec; "AS" comes off first.
        self.deck = (0..SUITS.len() as u8)
            .rev()
            .flat_map(|suit| (0..RANKS.len() as u8).rev().map(move |rank| Card { rank, suit }))
            .collect();
        self.hands = vec![Vec::new(); players as usize];
        self.phase = Phase::Running;
        Ok(())
    }

    fn take_card(&mut self, player: u32) -> Result<Card, ActionError> {
        if self.phase != Phase::Running {
            return Err(ActionError::rejected("no game is running"));
        }
        let player_count = self.hands.len();
        let hand = self
            .hands
            .get_mut(player as usize)
            .ok_or_else(|| ActionError::InvalidArgument {
                index: 0,
                reason: format!("player {player} is not seated ({player_count} players)"),
            })?;
        let card = self
            .deck
            .pop()
            .ok_or_else(|| ActionError::rejected("the deck is empty"))?;
        hand.push(card);
        Ok(card)
    }

    fn end(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::Running {
            return Err(ActionError::rejected("no game is running"));
        }
        self.phase = Phase::Finished;
        Ok(())
    }
}

/// Table shared between the actions and the host that reports on it.
#[derive(Debug, Clone, Default)]
pub struct SharedTable(Arc<Mutex<Table>>);

impl SharedTable {
    pub fn lock(&self) -> Result<MutexGuard<'_, Table>, ActionError> {
        self.0
            .lock()
            .map_err(|_| ActionError::rejected("table state is poisoned"))
    }
}

pub struct StartGame {
    table: SharedTable,
}

impl TypedAction for StartGame {
    const CODE: &'static str = "game.start";
    type Args = (u32,);

    fn perform(&self, (players,): (u32,)) -> Result<(), ActionError> {
        self.table.lock()?.start(players)?;
        info!(players, "game started");
        Ok(())
    }
}

pub struct TakeCard {
    table: SharedTable,
}

impl TypedAction for TakeCard {
    const CODE: &'static str = "game.take-card";
    type Args = (u32,);

    fn perform(&self, (player,): (u32,)) -> Result<(), ActionError> {
        let card = self.table.lock()?.take_card(player)?;
        info!(player, %card, "card taken");
        Ok(())
    }
}

pub struct EndGame {
    table: SharedTable,
}

impl TypedAction for EndGame {
    const CODE: &'static str = "game.end";
    type Args = ();

    fn perform(&self, _args: ()) -> Result<(), ActionError> {
        self.table.lock()?.end()?;
        info!("game finished");
        Ok(())
    }
}

/// Codes every build of the demo must provide.
pub const GAME_CODES: [&str; 3] = [StartGame::CODE, TakeCard::CODE, EndGame::CODE];

/// Register the game actions on `builder`, all sharing `table`.
pub fn register_actions(
    builder: ActionStoreBuilder,
    table: &SharedTable,
) -> Result<ActionStoreBuilder, RegistryError> {
    Ok(builder
        .register_typed(StartGame {
            table: table.clone(),
        })?
        .register_typed(TakeCard {
            table: table.clone(),
        })?
        .register_typed(EndGame {
            table: table.clone(),
        })?
        .expect_codes(&GAME_CODES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionstore_core::{ActionArgs, DispatchError, Dispatcher};
    use rstest::rstest;
    use serde_json::json;

    fn setup() -> (Dispatcher, SharedTable) {
        let table = SharedTable::default();
        let store = register_actions(ActionStoreBuilder::new(), &table)
            .unwrap()
            .build()
            .unwrap();
        (Dispatcher::from(store), table)
    }

    fn args(values: Vec<serde_json::Value>) -> ActionArgs {
        ActionArgs::new(values)
    }

    #[test]
    fn registers_all_game_codes() {
        let (dispatcher, _table) = setup();
        for code in GAME_CODES {
            assert!(dispatcher.store().contains(code));
        }
    }

    #[test]
    fn start_then_take_cards() {
        let (dispatcher, table) = setup();
        dispatcher.dispatch("game.start", &args(vec![json!(2)])).unwrap();
        dispatcher.dispatch("game.take-card", &args(vec![json!(0)])).unwrap();
        dispatcher.dispatch("game.take-card", &args(vec![json!(1)])).unwrap();
        dispatcher.dispatch("game.take-card", &args(vec![json!(0)])).unwrap();

        let table = table.lock().unwrap();
        assert_eq!(table.phase(), Phase::Running);
        assert_eq!(table.deck_len(), 49);
        let first: Vec<String> = table.hands[0].iter().map(Card::to_string).collect();
        assert_eq!(first, vec!["AS", "3S"]);
        assert_eq!(table.hands[1][0].to_string(), "2S");
    }

    #[rstest]
    #[case::too_few(1)]
    #[case::too_many(7)]
    fn start_rejects_player_count(#[case] players: u32) {
        let (dispatcher, table) = setup();
        let err = dispatcher
            .dispatch("game.start", &args(vec![json!(players)]))
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::ActionFailed { source: ActionError::InvalidArgument { index: 0, .. }, .. }
        ));
        assert_eq!(table.lock().unwrap().phase(), Phase::Idle);
    }

    #[test]
    fn start_twice_is_rejected() {
        let (dispatcher, _table) = setup();
        dispatcher.dispatch("game.start", &args(vec![json!(3)])).unwrap();
        let err = dispatcher
            .dispatch("game.start", &args(vec![json!(3)]))
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::ActionFailed { source: ActionError::Rejected(_), .. }
        ));
    }

    #[test]
    fn take_card_requires_running_game() {
        let (dispatcher, _table) = setup();
        let err = dispatcher
            .dispatch("game.take-card", &args(vec![json!(0)]))
            .unwrap_err();
        assert!(!err.is_unknown_action());
        assert!(err.to_string().contains("no game is running"));
    }

    #[test]
    fn take_card_rejects_unseated_player() {
        let (dispatcher, table) = setup();
        dispatcher.dispatch("game.start", &args(vec![json!(2)])).unwrap();
        let err = dispatcher
            .dispatch("game.take-card", &args(vec![json!(5)]))
            .unwrap_err();
        assert!(err.to_string().contains("player 5 is not seated"));
        assert_eq!(table.lock().unwrap().deck_len(), 52);
    }

    #[test]
    fn deck_runs_out() {
        let (dispatcher, _table) = setup();
        dispatcher.dispatch("game.start", &args(vec![json!(2)])).unwrap();
        for _ in 0..52 {
            dispatcher.dispatch("game.take-card", &args(vec![json!(0)])).unwrap();
        }
        let err = dispatcher
            .dispatch("game.take-card", &args(vec![json!(1)]))
            .unwrap_err();
        assert!(err.to_string().contains("the deck is empty"));
    }

    #[test]
    fn end_finishes_game_and_allows_restart() {
        let (dispatcher, table) = setup();
        dispatcher.dispatch("game.start", &args(vec![json!(2)])).unwrap();
        dispatcher.dispatch("game.end", &ActionArgs::empty()).unwrap();
        assert_eq!(table.lock().unwrap().phase(), Phase::Finished);

        dispatcher.dispatch("game.start", &args(vec![json!(4)])).unwrap();
        assert_eq!(table.lock().unwrap().summary(), "phase=Running deck=52 hands=[0, 0, 0, 0]");
    }
}
