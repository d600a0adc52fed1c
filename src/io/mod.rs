// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for video sources, settings files and ground-truth logs.

pub mod ground_truth;
pub mod media;
pub mod serialization;
