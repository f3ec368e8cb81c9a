use crate::errors::{Error, Result};

/// Form fields exactly as the UI hands them over: untyped strings.
///
/// `extra` is cadence (steps/min) for running, elevation gain (m) for cycling.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub extra: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Running,
    Cycling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedForm {
    pub kind: FormKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub extra: f64,
}

/// Turn raw form strings into numbers. Range checks (positivity, finiteness)
/// stay with the model; this layer only rejects non-numeric text and unknown
/// workout types.
pub fn parse(input: &FormInput) -> Result<ParsedForm> {
    let kind = match input.kind.trim() {
        "running" => FormKind::Running,
        "cycling" => FormKind::Cycling,
        other => {
            return Err(Error::InvalidInput(format!(
                "unknown workout type {other:?} (expected \"running\" or \"cycling\")"
            )));
        }
    };

    let extra_field = match kind {
        FormKind::Running => "cadence",
        FormKind::Cycling => "elevation gain",
    };

    Ok(ParsedForm {
        kind,
        distance_km: number("distance", &input.distance)?,
        duration_min: number("duration", &input.duration)?,
        extra: number(extra_field, &input.extra)?,
    })
}

fn number(field: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        Error::InvalidInput(format!("{field} must be a number, got {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(kind: &str, distance: &str, duration: &str, extra: &str) -> FormInput {
        FormInput {
            kind: kind.to_owned(),
            distance: distance.to_owned(),
            duration: duration.to_owned(),
            extra: extra.to_owned(),
        }
    }

    #[test]
    fn parses_a_running_submission() {
        let parsed = parse(&input("running", "5", "25", "180")).unwrap();
        assert_eq!(parsed.kind, FormKind::Running);
        assert!((parsed.distance_km - 5.0).abs() < 1e-9);
        assert!((parsed.duration_min - 25.0).abs() < 1e-9);
        assert!((parsed.extra - 180.0).abs() < 1e-9);
    }

    #[test]
    fn accepts_surrounding_whitespace_and_negative_elevation() {
        let parsed = parse(&input(" cycling ", " 10 ", "40", "-320")).unwrap();
        assert_eq!(parsed.kind, FormKind::Cycling);
        assert!((parsed.extra + 320.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_unknown_type() {
        let err = parse(&input("swimming", "5", "25", "180")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "{err}");
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!(parse(&input("running", "five", "25", "180")).is_err());
        assert!(parse(&input("running", "5", "", "180")).is_err());
        assert!(parse(&input("cycling", "10", "40", "uphill")).is_err());
    }
}
