//! 専門家ペルソナ表：ペルソナ名からシステムメッセージを引く。
//!
//! Persona table.
//!
//! Maps the label of an expert persona to the system instruction that is sent
//! ahead of the user's text. The table is fixed at compile time; lookups by an
//! unknown label fall back to a generic assistant instruction instead of
//! failing.

use std::fmt;

/// Instruction used for any label that is not in the table.
pub const FALLBACK_INSTRUCTION: &str =
    "あなたは有能なアシスタントです。簡潔かつ正確に答えてください。";

const DATA_SCIENTIST_INSTRUCTION: &str = concat!(
    "あなたは一流のデータサイエンティストです。",
    "前提・仮説・検証手法・評価指標・限界を順序立てて説明し、",
    "必要なら簡潔な数式や疑似コードも示してください。",
    "専門用語は中高生にも伝わるよう短く補足してください。",
);

const PRODUCT_MANAGER_INSTRUCTION: &str = concat!(
    "あなたは熟練のプロダクトマネージャーです。",
    "ユーザ課題→解決案→成功指標(KPI)→リスク/代替案→次アクションの順で提案してください。",
    "箇条書きを基本に、過度に長文にしないでください。",
);

/// Expert persona selectable from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Persona {
    #[default]
    DataScientist,
    ProductManager,
}

impl Persona {
    /// All personas in display order.
    pub const ALL: [Persona; 2] = [Persona::DataScientist, Persona::ProductManager];

    /// Label shown in the role selector and submitted with the form.
    pub fn label(self) -> &'static str {
        match self {
            Persona::DataScientist => "データサイエンティスト",
            Persona::ProductManager => "プロダクトマネージャー",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Persona::DataScientist => DATA_SCIENTIST_INSTRUCTION,
            Persona::ProductManager => PRODUCT_MANAGER_INSTRUCTION,
        }
    }

    /// Exact-match lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolve a persona label to its system instruction.
///
/// Never fails: labels outside the table get [`FALLBACK_INSTRUCTION`].
pub fn system_instruction_for(label: &str) -> &'static str {
    Persona::from_label(label)
        .map(Persona::instruction)
        .unwrap_or(FALLBACK_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_resolve_exactly() {
        assert_eq!(
            system_instruction_for("データサイエンティスト"),
            "あなたは一流のデータサイエンティストです。前提・仮説・検証手法・評価指標・限界を順序立てて説明し、必要なら簡潔な数式や疑似コードも示してください。専門用語は中高生にも伝わるよう短く補足してください。"
        );
        assert_eq!(
            system_instruction_for("プロダクトマネージャー"),
            "あなたは熟練のプロダクトマネージャーです。ユーザ課題→解決案→成功指標(KPI)→リスク/代替案→次アクションの順で提案してください。箇条書きを基本に、過度に長文にしないでください。"
        );
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        for label in ["unknown-role", "", " データサイエンティスト", "DataScientist", "エンジニア"] {
            assert_eq!(system_instruction_for(label), FALLBACK_INSTRUCTION, "label {label:?}");
        }
    }

    #[test]
    fn test_label_round_trip_and_default() {
        for p in Persona::ALL {
            assert_eq!(Persona::from_label(p.label()), Some(p));
            assert_eq!(p.to_string(), p.label());
        }
        assert_eq!(Persona::default(), Persona::ALL[0]);
        assert_ne!(Persona::DataScientist.instruction(), FALLBACK_INSTRUCTION);
    }
}
