use std::num::ParseIntError;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// One scripted user or host action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Toggle,
    Tap(usize),
    LongTap(usize),
    Wait(Duration),
    Rtl(bool),
    Duration(Duration),
}

#[derive(Debug, Error)]
pub enum StepError {
    #[error("unknown step '{0}'")]
    Unknown(String),
    #[error("step '{step}' needs a number: {source}")]
    BadNumber {
        step: String,
        #[source]
        source: ParseIntError,
    },
    #[error("step '{0}' needs on or off")]
    BadSwitch(String),
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let number = |arg: Option<&str>| -> Result<u64, StepError> {
            let step = s.to_string();
            let digits = arg.unwrap_or_default();
            digits
                .parse()
                .map_err(|source| StepError::BadNumber { step, source })
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("toggle", None) => Ok(Step::Toggle),
            ("tap", arg) => Ok(Step::Tap(number(arg)? as usize)),
            ("long", arg) => Ok(Step::LongTap(number(arg)? as usize)),
            ("wait", arg) => Ok(Step::Wait(Duration::from_millis(number(arg)?))),
            ("duration", arg) => Ok(Step::Duration(Duration::from_millis(number(arg)?))),
            ("rtl", Some("on" | "true")) => Ok(Step::Rtl(true)),
            ("rtl", Some("off" | "false")) => Ok(Step::Rtl(false)),
            ("rtl", _) => Err(StepError::BadSwitch(s.to_string())),
            _ => Err(StepError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SimEvent {
    Step(Step),
    ConfigReload,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_parsing() {
        let cases = vec![
            ("toggle", Step::Toggle),
            ("TOGGLE", Step::Toggle),
            ("tap:2", Step::Tap(2)),
            ("long:0", Step::LongTap(0)),
            ("wait:400", Step::Wait(Duration::from_millis(400))),
            (" duration:250 ", Step::Duration(Duration::from_millis(250))),
            ("rtl:on", Step::Rtl(true)),
            ("rtl:false", Step::Rtl(false)),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<Step>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_step_errors() {
        let err = |s: &str| s.parse::<Step>().unwrap_err();

        assert!(matches!(err("tap"), StepError::BadNumber { .. }));
        assert!(matches!(err("wait:soon"), StepError::BadNumber { .. }));
        assert!(matches!(err("rtl:maybe"), StepError::BadSwitch(_)));
        assert!(matches!(err("toggle:1"), StepError::Unknown(_)));
        assert!(matches!(err("jump"), StepError::Unknown(_)));
    }
}
