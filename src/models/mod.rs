// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: settings, session state and annotation records.

pub mod annotation;
pub mod session;
pub mod settings;
