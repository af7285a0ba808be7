//! Session-Zustand, Eingabe-Events und die Zeichenmodus-Zustandsmaschinen.

pub mod controller;
pub mod events;
pub mod history;
pub mod state;
pub mod tools;

pub use controller::EditorController;
pub use events::{InputEvent, PointerButton, PointerPhase};
pub use history::EditHistory;
pub use state::{EditorState, GestureState};
