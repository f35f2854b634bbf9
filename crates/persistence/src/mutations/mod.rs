// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Every mutation runs inside an immediate transaction, so a failed write
//! leaves no partial rows behind. Inserts hand back the new row id through
//! a `RETURNING` clause.
//!
//! ## Module Organization
//!
//! - `venues` - venue create, full update and delete
//! - `artists` - artist create, full update and delete
//! - `shows` - show creation with reference checks

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::{create_artist, delete_artist, update_artist};
pub use shows::create_show;
pub use venues::{create_venue, delete_venue, update_venue};
