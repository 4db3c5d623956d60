// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command batch data.
//!
//! Commands are pure data: an ordered sequence of `{code, value}` pairs
//! submitted to the device as one atomic batch. Submission and transport
//! are the vendor SDK's responsibility; this library only assembles
//! batches. The serialized form is the SDK's
//! `[{"code": ..., "value": ...}]` shape.

use serde::{Deserialize, Serialize};

use crate::types::DpValue;

/// One data-point write within a batch.
///
/// # Examples
///
/// ```
/// use dpcover::command::CommandPair;
///
/// let pair = CommandPair::new("switch_1", true);
/// assert_eq!(
///     serde_json::to_string(&pair).unwrap(),
///     r#"{"code":"switch_1","value":true}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPair {
    /// The data-point code to write.
    pub code: String,
    /// The raw value to write.
    pub value: DpValue,
}

impl CommandPair {
    /// Creates a pair from a code and any raw value shape.
    pub fn new(code: impl Into<String>, value: impl Into<DpValue>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }
}

/// An ordered command batch for one device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandBatch(Vec<CommandPair>);

impl CommandBatch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a pair to the batch.
    pub fn push(&mut self, pair: CommandPair) {
        self.0.push(pair);
    }

    /// Returns the pairs in submission order.
    #[must_use]
    pub fn pairs(&self) -> &[CommandPair] {
        &self.0
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the batch contains no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the batch into its pairs.
    #[must_use]
    pub fn into_vec(self) -> Vec<CommandPair> {
        self.0
    }
}

impl From<Vec<CommandPair>> for CommandBatch {
    fn from(pairs: Vec<CommandPair>) -> Self {
        Self(pairs)
    }
}

impl FromIterator<CommandPair> for CommandBatch {
    fn from_iter<T: IntoIterator<Item = CommandPair>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CommandBatch {
    type Item = CommandPair;
    type IntoIter = std::vec::IntoIter<CommandPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommandBatch {
    type Item = &'a CommandPair;
    type IntoIter = std::slice::Iter<'a, CommandPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_preserves_order() {
        let batch: CommandBatch = vec![
            CommandPair::new("control", "open"),
            CommandPair::new("percent_control", 0),
        ]
        .into();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.pairs()[0].code, "control");
        assert_eq!(batch.pairs()[1].code, "percent_control");
    }

    #[test]
    fn serializes_to_sdk_shape() {
        let batch: CommandBatch = vec![
            CommandPair::new("switch_1", true),
            CommandPair::new("percent_control", 100),
        ]
        .into();

        assert_eq!(
            serde_json::to_string(&batch).unwrap(),
            r#"[{"code":"switch_1","value":true},{"code":"percent_control","value":100}]"#
        );
    }

    #[test]
    fn empty_batch() {
        let batch = CommandBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert_eq!(serde_json::to_string(&batch).unwrap(), "[]");
    }

    #[test]
    fn iterates_by_reference_and_value() {
        let batch: CommandBatch = vec![CommandPair::new("control", "stop")].into();
        assert_eq!((&batch).into_iter().count(), 1);
        assert_eq!(batch.into_iter().count(), 1);
    }
}
