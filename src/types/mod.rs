//! 型定義モジュール：チャットメッセージの基本型。
//!
//! # Types Module
//!
//! Core message types exchanged between the prompt assembler and the
//! completion client.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and text content |
//! | [`MessageRole`] | Message role (system, user, assistant) |

pub mod message;

pub use message::{Message, MessageRole};
