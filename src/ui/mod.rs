// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Display surface: frame overlays and the main window.

pub mod overlay;
pub mod window;
