use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use super::game::TicTacToeGame;
use super::session::{GameSession, SessionStatus, TurnReport};
use super::types::{BOARD_SIZE, DifficultyLevel, GameOutcome, Mark};
use crate::games::SessionRng;
use crate::log;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub cells: [Mark; BOARD_SIZE],
    pub difficulty: DifficultyLevel,
    pub status: SessionStatus,
    pub outcome: GameOutcome,
}

impl SessionSnapshot {
    fn from_session(session: &GameSession) -> Self {
        Self {
            cells: *session.board().cells(),
            difficulty: session.difficulty(),
            status: session.status(),
            outcome: session.outcome(),
        }
    }
}

/// Hosts many independent games. Each session sits behind its own lock, so
/// sessions never share state and one session is mutated by one caller at a
/// time.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, Arc<Mutex<GameSession>>>>>,
    next_id: Arc<AtomicU64>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_session(
        &self,
        difficulty: DifficultyLevel,
        seed: Option<u64>,
    ) -> SessionId {
        let rng = match seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        let session = GameSession::new(TicTacToeGame::new(difficulty, rng));
        let session_id = SessionId::new(format!(
            "session-{}",
            self.next_id.fetch_add(1, Ordering::Relaxed) + 1
        ));

        self.sessions
            .lock()
            .await
            .insert(session_id.clone(), Arc::new(Mutex::new(session)));

        log!("Game session created: {} ({})", session_id, difficulty);
        session_id
    }

    pub async fn remove_session(&self, session_id: &SessionId) -> bool {
        let removed = self.sessions.lock().await.remove(session_id).is_some();
        if removed {
            log!("Game session removed: {}", session_id);
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn handle_cell_activated(
        &self,
        session_id: &SessionId,
        index: usize,
    ) -> Result<TurnReport, String> {
        let session = self.get_session(session_id).await?;
        let mut session = session.lock().await;
        session
            .handle_cell_activated(index)
            .map_err(|e| e.to_string())
    }

    pub async fn set_difficulty(
        &self,
        session_id: &SessionId,
        difficulty: DifficultyLevel,
    ) -> Result<(), String> {
        let session = self.get_session(session_id).await?;
        session.lock().await.set_difficulty(difficulty);
        Ok(())
    }

    pub async fn new_game(&self, session_id: &SessionId) -> Result<(), String> {
        let session = self.get_session(session_id).await?;
        session.lock().await.new_game();
        Ok(())
    }

    pub async fn snapshot(&self, session_id: &SessionId) -> Result<SessionSnapshot, String> {
        let session = self.get_session(session_id).await?;
        let session = session.lock().await;
        Ok(SessionSnapshot::from_session(&session))
    }

    async fn get_session(&self, session_id: &SessionId) -> Result<Arc<Mutex<GameSession>>, String> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| format!("Game session {} not found", session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sessions_get_distinct_ids() {
        let manager = SessionManager::new();

        let first = manager.create_session(DifficultyLevel::Easy, Some(1)).await;
        let second = manager.create_session(DifficultyLevel::Easy, Some(1)).await;

        assert_ne!(first, second);
        assert_eq!(manager.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_moves_in_one_session_do_not_touch_another() {
        let manager = SessionManager::new();
        let first = manager.create_session(DifficultyLevel::Expert, Some(10)).await;
        let second = manager.create_session(DifficultyLevel::Expert, Some(20)).await;

        manager.handle_cell_activated(&first, 4).await.unwrap();

        let untouched = manager.snapshot(&second).await.unwrap();
        assert_eq!(untouched.cells, [Mark::Empty; BOARD_SIZE]);
        assert_eq!(untouched.status, SessionStatus::HumanGoesFirst);

        let played = manager.snapshot(&first).await.unwrap();
        assert_eq!(played.cells[4], Mark::Human);
        assert_eq!(played.status, SessionStatus::HumanTurn);
    }

    #[tokio::test]
    async fn test_difficulty_is_per_session() {
        let manager = SessionManager::new();
        let first = manager.create_session(DifficultyLevel::Easy, Some(1)).await;
        let second = manager.create_session(DifficultyLevel::Easy, Some(2)).await;

        manager.set_difficulty(&first, DifficultyLevel::Expert).await.unwrap();

        assert_eq!(manager.snapshot(&first).await.unwrap().difficulty, DifficultyLevel::Expert);
        assert_eq!(manager.snapshot(&second).await.unwrap().difficulty, DifficultyLevel::Easy);
    }

    #[tokio::test]
    async fn test_unknown_session_is_an_error() {
        let manager = SessionManager::new();
        let missing = SessionId::new("nope".to_string());

        let result = manager.handle_cell_activated(&missing, 0).await;

        assert_eq!(result, Err("Game session nope not found".to_string()));
    }

    #[tokio::test]
    async fn test_illegal_move_error_is_reported() {
        let manager = SessionManager::new();
        let id = manager.create_session(DifficultyLevel::Easy, Some(3)).await;
        manager.handle_cell_activated(&id, 0).await.unwrap();

        let result = manager.handle_cell_activated(&id, 0).await;

        assert_eq!(result, Err("Cell 0 is already marked".to_string()));
    }

    #[tokio::test]
    async fn test_new_game_and_remove_session() {
        let manager = SessionManager::new();
        let id = manager.create_session(DifficultyLevel::Harder, None).await;
        manager.handle_cell_activated(&id, 8).await.unwrap();

        manager.new_game(&id).await.unwrap();
        assert_eq!(manager.snapshot(&id).await.unwrap().cells, [Mark::Empty; BOARD_SIZE]);

        assert!(manager.remove_session(&id).await);
        assert!(!manager.remove_session(&id).await);
        assert!(manager.snapshot(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_sessions_play_to_completion() {
        let manager = SessionManager::new();
        let mut handles = Vec::new();

        for seed in 0..8 {
            let manager = manager.clone();
            handles.push(tokio::spawn(async move {
                let id = manager.create_session(DifficultyLevel::Expert, Some(seed)).await;
                loop {
                    let snapshot = manager.snapshot(&id).await.unwrap();
                    if snapshot.outcome.is_over() {
                        return snapshot.outcome;
                    }
                    let next = snapshot.cells.iter().position(|cell| cell.is_empty()).unwrap();
                    manager.handle_cell_activated(&id, next).await.unwrap();
                }
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_over());
        }
        assert_eq!(manager.session_count().await, 8);
    }
}
