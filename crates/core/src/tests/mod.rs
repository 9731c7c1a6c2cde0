// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod bulk_add_tests;
mod columns_tests;
mod helpers;
mod lock_tests;
mod scenario_tests;
