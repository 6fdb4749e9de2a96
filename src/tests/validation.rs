use crate::prelude::*;
use crate::network::ParamRules;
use crate::weirdgloop::runescape::TMS_SEARCH_RULES;

const SEARCH_KEYS: &[&str] = &["start", "end", "id", "name", "number", "lang"];

fn subset(mask: usize) -> Params {
    SEARCH_KEYS.iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << *i) != 0)
        .map(|(_, key)| (*key, "1"))
        .collect()
}

#[test]
fn test_tms_search_rules_all_subsets() {
    for mask in 0usize..(1 << SEARCH_KEYS.len()) {
        let params = subset(mask);

        let has_required = ["start", "number", "name", "id"].iter().any(|key| params.contains(key));
        let has_conflict = (params.contains("end") && params.contains("number")) ||
                           (params.contains("name") && params.contains("id"));

        assert_eq!(TMS_SEARCH_RULES.validate(&params), has_required && !has_conflict, "{params:?}");
    }
}

#[test]
fn test_tms_search_violations() {
    let params = Params::new().with("lang", "en");

    assert_eq!(
        TMS_SEARCH_RULES.check(&params),
        Err(ValidationError::MissingRequired(vec![
            String::from("start"),
            String::from("number"),
            String::from("name"),
            String::from("id")
        ]))
    );

    let params = Params::new()
        .with("start", "today")
        .with("end", "today")
        .with("number", 5);

    assert_eq!(
        TMS_SEARCH_RULES.check(&params),
        Err(ValidationError::Conflict {
            first: String::from("end"),
            second: String::from("number")
        })
    );

    let params = Params::new()
        .with("start", "2022-01-01")
        .with("end", "2022-01-07")
        .with("id", "42274");

    assert_eq!(TMS_SEARCH_RULES.check(&params), Ok(()));
}

#[test]
fn test_empty_rules() {
    assert!(ParamRules::NONE.validate(&Params::new()));
    assert!(ParamRules::NONE.validate(&Params::new().with("id", 2).with("name", "Coal")));
}

#[test]
fn test_exchange_rules() {
    let exclusive = ExchangeRules::Exclusive.param_rules();
    let permissive = ExchangeRules::Permissive.param_rules();

    let id = Params::new().with("id", 2);
    let name = Params::new().with("name", "Coal");
    let both = Params::new().with("id", 2).with("name", "Coal");

    assert!(exclusive.validate(&id));
    assert!(exclusive.validate(&name));
    assert!(!exclusive.validate(&both));
    assert!(!exclusive.validate(&Params::new()));

    assert!(permissive.validate(&both));
    assert!(permissive.validate(&Params::new()));

    assert_eq!(ExchangeRules::default(), ExchangeRules::Exclusive);
}
