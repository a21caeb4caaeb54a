//! Pairwise comparison of two areas over their static attribute vectors.

use serde::{Deserialize, Serialize};

use crate::domain::{AreaId, EngineError};

use super::table::QuestionBank;

/// Who wins one attribute, or the pair overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    AWins,
    BWins,
    Tie,
}

/// One attribute's scores and verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeVerdict {
    pub attribute: String,
    pub a_score: u32,
    pub b_score: u32,
    pub verdict: Verdict,
}

/// The full pairwise comparison result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: AreaId,
    pub b: AreaId,
    pub attributes: Vec<AttributeVerdict>,

    /// Aggregate "calmer, simpler base" verdict over the two designated
    /// base attributes. Ties favor side A.
    pub calmer_base: Verdict,
}

/// Compare two areas attribute by attribute.
///
/// `attributes` lists the attribute ids to compare, in output order.
/// `base_attributes` designates the two attributes whose per-side sums
/// decide the aggregate "calmer, simpler base" verdict; the larger sum
/// wins and an exact tie favors side A (fixed, order of arguments is the
/// caller's to keep stable).
///
/// Comparing an area with itself is rejected with
/// [`EngineError::InvalidComparison`].
pub fn compare(
    bank: &QuestionBank,
    a: &AreaId,
    b: &AreaId,
    attributes: &[String],
    base_attributes: &[String; 2],
) -> Result<Comparison, EngineError> {
    if a == b {
        return Err(EngineError::InvalidComparison);
    }

    let profile_a = bank.area(a).ok_or_else(|| EngineError::UnknownArea(a.clone()))?;
    let profile_b = bank.area(b).ok_or_else(|| EngineError::UnknownArea(b.clone()))?;

    let attributes = attributes
        .iter()
        .map(|attr| {
            let a_score = profile_a.attribute(attr);
            let b_score = profile_b.attribute(attr);
            AttributeVerdict {
                attribute: attr.clone(),
                a_score,
                b_score,
                verdict: verdict_of(a_score, b_score),
            }
        })
        .collect();

    let base_a: u32 = base_attributes.iter().map(|attr| profile_a.attribute(attr)).sum();
    let base_b: u32 = base_attributes.iter().map(|attr| profile_b.attribute(attr)).sum();

    // Tie favors side A.
    let calmer_base = if base_b > base_a {
        Verdict::BWins
    } else {
        Verdict::AWins
    };

    Ok(Comparison {
        a: a.clone(),
        b: b.clone(),
        attributes,
        calmer_base,
    })
}

fn verdict_of(a: u32, b: u32) -> Verdict {
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Verdict::AWins,
        std::cmp::Ordering::Less => Verdict::BWins,
        std::cmp::Ordering::Equal => Verdict::Tie,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::table::AreaProfile;

    fn attrs() -> Vec<String> {
        ["nightlife", "calm", "first-time", "airport"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn base() -> [String; 2] {
        ["calm".to_string(), "airport".to_string()]
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(
            vec![],
            vec![
                AreaProfile::new("roppongi")
                    .attr("nightlife", 5)
                    .attr("calm", 1)
                    .attr("first-time", 3)
                    .attr("airport", 2),
                AreaProfile::new("asakusa")
                    .attr("nightlife", 1)
                    .attr("calm", 5)
                    .attr("first-time", 4)
                    .attr("airport", 4),
                AreaProfile::new("mirror-a").attr("calm", 2).attr("airport", 2),
                AreaProfile::new("mirror-b").attr("calm", 2).attr("airport", 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn per_attribute_verdicts() {
        let cmp = compare(
            &bank(),
            &AreaId::new("roppongi"),
            &AreaId::new("asakusa"),
            &attrs(),
            &base(),
        )
        .unwrap();

        assert_eq!(cmp.attributes[0].attribute, "nightlife");
        assert_eq!(cmp.attributes[0].verdict, Verdict::AWins);
        assert_eq!(cmp.attributes[1].verdict, Verdict::BWins);
        assert_eq!(cmp.attributes.len(), 4);
    }

    #[test]
    fn equal_scores_tie() {
        let cmp = compare(
            &bank(),
            &AreaId::new("mirror-a"),
            &AreaId::new("mirror-b"),
            &attrs(),
            &base(),
        )
        .unwrap();

        assert!(cmp.attributes.iter().all(|v| v.verdict == Verdict::Tie));
    }

    #[test]
    fn aggregate_sums_designated_attributes() {
        // asakusa base = 5 + 4 = 9; roppongi base = 1 + 2 = 3.
        let cmp = compare(
            &bank(),
            &AreaId::new("roppongi"),
            &AreaId::new("asakusa"),
            &attrs(),
            &base(),
        )
        .unwrap();

        assert_eq!(cmp.calmer_base, Verdict::BWins);
    }

    #[test]
    fn aggregate_tie_favors_side_a() {
        let cmp = compare(
            &bank(),
            &AreaId::new("mirror-a"),
            &AreaId::new("mirror-b"),
            &attrs(),
            &base(),
        )
        .unwrap();

        assert_eq!(cmp.calmer_base, Verdict::AWins);
    }

    #[test]
    fn self_comparison_rejected() {
        let err = compare(
            &bank(),
            &AreaId::new("asakusa"),
            &AreaId::new("asakusa"),
            &attrs(),
            &base(),
        )
        .unwrap_err();

        assert_eq!(err, EngineError::InvalidComparison);
    }

    #[test]
    fn unknown_area_rejected() {
        let err = compare(
            &bank(),
            &AreaId::new("atlantis"),
            &AreaId::new("asakusa"),
            &attrs(),
            &base(),
        )
        .unwrap_err();

        assert!(matches!(err, EngineError::UnknownArea(a) if a == AreaId::new("atlantis")));
    }

    #[test]
    fn unspecified_attribute_scores_zero() {
        let cmp = compare(
            &bank(),
            &AreaId::new("mirror-a"),
            &AreaId::new("asakusa"),
            &attrs(),
            &base(),
        )
        .unwrap();

        // mirror-a has no nightlife attribute at all.
        assert_eq!(cmp.attributes[0].a_score, 0);
        assert_eq!(cmp.attributes[0].verdict, Verdict::BWins);
    }
}
