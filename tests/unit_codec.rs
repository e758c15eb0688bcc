// tests/unit_codec.rs
//! Query-string encoding and decoding of view state.

use conceptgraph_core::filter::{
    decode, decode_query_string, encode, encode_query_string, ExploredFilter, FilterState,
    QueryParams,
};

fn known() -> Vec<String> {
    ["Methods", "Tools", "Principles", "Concepts"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn state_with(
    query: &str,
    hidden: &[&str],
    tags: &[&str],
    featured_only: bool,
    min_connections: usize,
    explored_filter: ExploredFilter,
) -> FilterState {
    FilterState {
        query: query.to_string(),
        hidden_categories: hidden.iter().map(|s| (*s).to_string()).collect(),
        selected_tags: tags.iter().map(|s| (*s).to_string()).collect(),
        featured_only,
        min_connections,
        explored_filter,
    }
}

#[test]
fn test_round_trip() {
    let cats = known();
    let cases = vec![
        FilterState::default(),
        state_with("bias", &[], &[], false, 0, ExploredFilter::All),
        state_with("", &["Tools"], &[], false, 0, ExploredFilter::All),
        state_with("", &[], &["psychology", "learning"], false, 0, ExploredFilter::All),
        state_with("", &[], &[], true, 0, ExploredFilter::All),
        state_with("", &[], &[], false, 7, ExploredFilter::All),
        state_with("", &[], &[], false, 0, ExploredFilter::Explored),
        state_with("", &[], &[], false, 0, ExploredFilter::NotExplored),
        state_with(
            "sunk cost & friends",
            &["Principles", "Methods"],
            &["decision making", "économie", "a=b"],
            true,
            3,
            ExploredFilter::NotExplored,
        ),
        // Tags are free text; surrounding whitespace is part of the tag.
        state_with("", &[], &[" padded ", "trailing "], false, 0, ExploredFilter::All),
        // Everything hidden must stay distinguishable from nothing hidden.
        state_with("", &["Methods", "Tools", "Principles", "Concepts"], &[], false, 0, ExploredFilter::All),
    ];

    for state in cases {
        let params = encode(&state, &cats);
        assert_eq!(decode(&params, &cats), state, "via params {params:?}");

        let text = encode_query_string(&state, &cats);
        assert_eq!(decode_query_string(&text, &cats), state, "via text {text:?}");
    }
}

#[test]
fn test_all_hidden_emits_full_list() {
    let cats = known();
    let state = state_with("", &["Methods", "Tools", "Principles", "Concepts"], &[], false, 0, ExploredFilter::All);
    let params = encode(&state, &cats);
    assert_eq!(params.get("hide"), Some("Methods,Tools,Principles,Concepts"));
    let decoded = decode(&params, &cats);
    assert_eq!(decoded.hidden_categories.len(), 4);
    assert!(decoded.visible_categories(&cats).is_empty());
}

#[test]
fn test_defaults_omitted() {
    let cats = known();
    let state = state_with("  ", &[], &[], false, 0, ExploredFilter::All);
    assert_eq!(encode_query_string(&state, &cats), "");

    let state = state_with("x", &[], &[], false, 0, ExploredFilter::All);
    let params = encode(&state, &cats);
    let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["q"]);
}

#[test]
fn test_explored_encoding() {
    let cats = known();
    let explored = state_with("", &[], &[], false, 0, ExploredFilter::Explored);
    let not_explored = state_with("", &[], &[], false, 0, ExploredFilter::NotExplored);
    assert_eq!(encode_query_string(&explored, &cats), "explored=1");
    assert_eq!(encode_query_string(&not_explored, &cats), "explored=0");
}

#[test]
fn test_lenient_decoding() {
    let cats = known();
    assert_eq!(decode_query_string("minDeg=abc", &cats).min_connections, 0);
    assert_eq!(decode_query_string("explored=maybe", &cats).explored_filter, ExploredFilter::All);
    assert!(!decode_query_string("featured=yes", &cats).featured_only);

    let state = decode_query_string("hide=Tools,Astrology,,methods", &cats);
    let hidden: Vec<&str> = state.hidden_categories.iter().map(String::as_str).collect();
    assert_eq!(hidden, vec!["Tools"], "Unknown and wrong-case tokens are dropped");
}

#[test]
fn test_unknown_keys_ignored() {
    let cats = known();
    let state = decode_query_string("utm_source=feed&q=inversion&page=2", &cats);
    assert_eq!(state, state_with("inversion", &[], &[], false, 0, ExploredFilter::All));
}

#[test]
fn test_decode_then_encode_normalizes() {
    let cats = known();
    let messy = "?tags=b,a,,&hide=Tools,Bogus&minDeg=0&explored=2&q=%20%20x%20";
    let normalized = encode_query_string(&decode_query_string(messy, &cats), &cats);
    assert_eq!(normalized, "q=x&hide=Tools&tags=a%2Cb");
    // Idempotent over its own output.
    let again = encode_query_string(&decode_query_string(&normalized, &cats), &cats);
    assert_eq!(again, normalized);
}

#[test]
fn test_params_parse_and_serialize() {
    let params = QueryParams::parse("q=a+b&tags=x%2Cy");
    assert_eq!(params.get("q"), Some("a b"));
    assert_eq!(params.get("tags"), Some("x,y"));
    assert_eq!(params.to_query_string(), "q=a+b&tags=x%2Cy");
}
