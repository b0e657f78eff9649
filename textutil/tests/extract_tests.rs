use textutil::{extract_map, extract_vector, trim_spaces, LIST_IGNORED, MAP_IGNORED};

#[test]
fn test_trim_spaces() {
    assert_eq!(trim_spaces("  padded value "), "padded value");
    assert_eq!(trim_spaces("inner  spaces"), "inner  spaces");
    assert_eq!(trim_spaces(""), "");
}

#[test]
fn test_extract_bracketed_list() {
    let values = extract_vector("[1.5, -2, (3)]\n", ',', LIST_IGNORED);
    assert_eq!(values, ["1.5", "-2", "3"]);
}

#[test]
fn test_extract_custom_delimiter() {
    assert_eq!(extract_vector("a;b;;c", ';', ""), ["a", "b", "", "c"]);
    assert_eq!(extract_vector("a;b;", ';', ""), ["a", "b"]);
    assert!(extract_vector("", ',', LIST_IGNORED).is_empty());
}

#[test]
fn test_extract_map_entries() {
    let input = "name = circle\n[radius] = 4\n\tcolor=red\n";
    let map = extract_map(input, '=', '\n', MAP_IGNORED);

    assert_eq!(map.len(), 3);
    assert_eq!(map["name"], "circle");
    assert_eq!(map["radius"], "4");
    assert_eq!(map["color"], "red");
}

#[test]
fn test_extract_map_edge_cases() {
    let map = extract_map("a=1;flag;;a=2;url=x=y", '=', ';', MAP_IGNORED);

    assert_eq!(map["a"], "2");
    assert_eq!(map["flag"], "");
    assert_eq!(map["url"], "x=y");
    assert!(!map.contains_key(""));
    assert_eq!(map.len(), 3);
}

#[test]
fn test_map_keys_are_ordered() {
    let map = extract_map("b=2\nc=3\na=1", '=', '\n', MAP_IGNORED);
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b", "c"]);
}
