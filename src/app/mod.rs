pub mod event_loop;
pub mod pointer_router;
pub mod state;
