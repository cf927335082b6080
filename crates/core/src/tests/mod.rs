// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario tests for the scheduling engine passes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

mod helpers;
mod roster;
