use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{GeoError, Result};
use super::wkt::WktNode;

/// One row of the SRID catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectionDefinition {
    pub srid: Option<u32>,
    /// Name from the top-level `UNIT[...]` clause, e.g. "US survey foot"
    pub unit: String,
    /// Every `PARAMETER["name", value]` in the WKT, by name
    pub parameters: BTreeMap<String, f64>,
    pub wkt: String,
}

impl ProjectionDefinition {
    pub fn parse(wkt: &str) -> Result<Self> {
        let root = WktNode::parse(wkt.trim())?;

        let unit = match root.child("UNIT").and_then(|u| u.name()) {
            Some(name) => name.to_string(),
            None if root.keyword.eq_ignore_ascii_case("GEOGCS") => "degree".to_string(),
            None => String::new(),
        };

        let parameters = root
            .descendants("PARAMETER")
            .into_iter()
            .filter_map(|p| Some((p.name()?.to_string(), p.number(0)?)))
            .collect();

        Ok(Self {
            srid: None,
            unit,
            parameters,
            wkt: wkt.trim().to_string(),
        })
    }

    /// Parse a `srid;wkt[;...]` catalog line
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut fields = line.split(';');
        let srid = fields.next().and_then(|f| f.trim().parse().ok());
        let wkt = fields
            .next()
            .filter(|f| !f.trim().is_empty())
            .ok_or_else(|| GeoError::wkt(0, "line has no WKT field"))?;

        let mut definition = Self::parse(wkt)?;
        definition.srid = srid;
        Ok(definition)
    }

    /// True for the placeholder a malformed line leaves behind
    pub fn is_empty(&self) -> bool {
        self.wkt.is_empty()
    }

    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

/// Parse a whole catalog. Blank lines and `#` comments are skipped; a line that
/// fails to parse leaves an empty definition in its place so the rest of the
/// catalog still loads.
pub fn parse_srid_catalog(text: &str) -> Vec<ProjectionDefinition> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(number, line)| {
            ProjectionDefinition::parse_line(line).unwrap_or_else(|e| {
                warn!(line = number + 1, error = %e, "skipping malformed SRID catalog line");
                ProjectionDefinition::default()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{TEXAS_CENTRAL_FTUS, srid_catalog};

    #[test]
    fn test_parse_definition() {
        let def = ProjectionDefinition::parse(TEXAS_CENTRAL_FTUS).unwrap();
        assert_eq!(def.unit, "US survey foot");
        assert_eq!(def.parameters.len(), 6);
        assert_eq!(def.parameter("false_northing"), Some(9842500.0));
        assert_eq!(def.parameter("Central_Meridian"), Some(-100.3333333333333));
        assert!(def.wkt.contains("Texas Central"));
    }

    #[test]
    fn test_unit_comes_from_projcs_not_geogcs() {
        let def = ProjectionDefinition::parse(
            r#"PROJCS["p",GEOGCS["g",UNIT["degree",0.01745]],UNIT["metre",1]]"#,
        )
        .unwrap();
        assert_eq!(def.unit, "metre");
    }

    #[test]
    fn test_parse_line() {
        let def = ProjectionDefinition::parse_line(&format!("2277;{TEXAS_CENTRAL_FTUS}")).unwrap();
        assert_eq!(def.srid, Some(2277));
        assert!(ProjectionDefinition::parse_line("2277").is_err());
        assert!(ProjectionDefinition::parse_line("2277;").is_err());
    }

    #[test]
    fn test_catalog_skips_comments_and_blank_lines() {
        let defs = parse_srid_catalog(&srid_catalog());
        assert_eq!(defs.len(), 3);
        assert_eq!(
            defs.iter().map(|d| d.srid).collect::<Vec<_>>(),
            vec![Some(2277), Some(32139), Some(2276)]
        );
    }

    #[test]
    fn test_malformed_line_leaves_empty_definition() {
        let text = format!("1;PROJCS[\"broken\"\n2277;{TEXAS_CENTRAL_FTUS}\n");
        let defs = parse_srid_catalog(&text);
        assert_eq!(defs.len(), 2);
        assert!(defs[0].is_empty());
        assert_eq!(defs[0], ProjectionDefinition::default());
        assert_eq!(defs[1].srid, Some(2277));
    }

    #[test]
    fn test_deeply_nested_line_leaves_empty_definition() {
        let text = format!("1;{}1{}\n", "A[".repeat(200_000), "]".repeat(200_000));
        let defs = parse_srid_catalog(&text);
        assert_eq!(defs, vec![ProjectionDefinition::default()]);
    }
}
