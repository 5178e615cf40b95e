use crate::error::FontResult;

use super::{lines, parse_number, Section};

/// Horizontal adjustment applied when `left` is immediately followed by `right`
#[derive(Debug, Clone, PartialEq)]
pub struct KernPair {
    pub left: String,
    pub right: String,
    pub x_offset: f32,
}

impl KernPair {
    pub fn new(left: &str, right: &str, x_offset: f32) -> Self {
        Self {
            left: left.to_owned(),
            right: right.to_owned(),
            x_offset,
        }
    }
}

pub(super) fn parse_kern_pairs(section: &Section) -> FontResult<Vec<KernPair>> {
    let mut pairs = Vec::new();

    for line in lines(section.body) {
        let mut parts = line.split_whitespace();

        match parts.next() {
            // the y component of `KP` is always zero for the standard fonts
            Some(key @ ("KPX" | "KP")) => match (parts.next(), parts.next(), parts.next()) {
                (Some(left), Some(right), Some(x)) => {
                    pairs.push(KernPair::new(left, right, parse_number(key, x)?));
                }
                _ => log::trace!("skipping truncated kern pair {:?}", line),
            },
            Some("Comment") | None => {}
            Some(other) => log::trace!("skipping kern pair command {:?}", other),
        }
    }

    if let Some(declared) = section.declared_count {
        if declared != pairs.len() {
            log::debug!(
                "StartKernPairs declares {} pairs, found {}",
                declared,
                pairs.len()
            );
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::FontError;

    fn section(body: &str) -> Section {
        Section {
            marker_offset: 0,
            declared_count: None,
            body,
        }
    }

    #[test]
    fn kpx_and_kp() {
        let pairs = parse_kern_pairs(&section(
            "\nKPX A V -70\nComment uppercase pairs end here\nKP T o -120 0\n\n",
        ))
        .unwrap();

        assert_eq!(
            pairs,
            vec![KernPair::new("A", "V", -70.0), KernPair::new("T", "o", -120.0)]
        );
    }

    #[test]
    fn bare_cr_separates_pairs() {
        let pairs = parse_kern_pairs(&section("\rKPX A V -70\rKPX V A -80\r")).unwrap();

        assert_eq!(
            pairs,
            vec![KernPair::new("A", "V", -70.0), KernPair::new("V", "A", -80.0)]
        );
    }

    #[test]
    fn order_is_preserved() {
        let pairs = parse_kern_pairs(&section("KPX V A -80\nKPX A V -70\n")).unwrap();

        assert_eq!(pairs[0].left, "V");
        assert_eq!(pairs[1].left, "A");
    }

    #[test]
    fn unknown_commands_are_skipped() {
        let pairs = parse_kern_pairs(&section("KPY A V 10\nKPX A V -70\n")).unwrap();

        assert_eq!(pairs, vec![KernPair::new("A", "V", -70.0)]);
    }

    #[test]
    fn invalid_offset() {
        assert!(matches!(
            parse_kern_pairs(&section("KPX A V lots\n")),
            Err(FontError::InvalidNumber { .. })
        ));
    }
}
