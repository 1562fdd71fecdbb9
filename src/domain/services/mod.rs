// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod field_extractor;
pub mod menu_navigator;
pub mod selectors;
pub mod translation_service;
