// Travily state managers
// Managers handle stateful operations: search history and session state.

pub mod search_history;
pub mod session_manager;
