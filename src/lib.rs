//! Pure simulation core for the arena shooter.  Terminal I/O lives in the
//! binary; everything here is plain data and total functions over it.

pub mod compute;
pub mod entities;
pub mod viewport;
pub mod weapons;
