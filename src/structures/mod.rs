//! Sequence containers backing the scoreboard.

pub mod doubly_linked_list;
mod list;

pub use doubly_linked_list::{DoublyLinkedList, IntoIter, Iter};
pub use list::List;
