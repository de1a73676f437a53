pub mod check;
pub mod extract;
pub mod run;
pub mod verify;
