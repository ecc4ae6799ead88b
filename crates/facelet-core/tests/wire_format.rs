//! The flat wire form as a service layer would exchange it.

use facelet_core::{parse_sequence, Color, ColorScheme, CubeState, Face, Move};

#[test]
fn solved_state_json_lists_faces_in_fixed_order() {
    let json = serde_json::to_string(&CubeState::solved()).unwrap();
    let order: Vec<usize> = ["green", "blue", "white", "yellow", "red", "orange"]
        .iter()
        .map(|c| json.find(c).unwrap())
        .collect();
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted, "faces must serialise as L R U D F B");
}

#[test]
fn state_accepts_arbitrary_color_tokens() {
    let json = r##"[
        ["#0f0","#0f0","#0f0","#0f0","#0f0","#0f0","#0f0","#0f0","#0f0"],
        ["b","b","b","b","b","b","b","b","b"],
        ["w","w","w","w","w","w","w","w","w"],
        ["y","y","y","y","y","y","y","y","y"],
        ["r","r","r","r","r","r","r","r","r"],
        ["o","o","o","o","o","o","o","o","o"]
    ]"##;
    let state: CubeState = serde_json::from_str(json).unwrap();
    assert!(state.is_solved());
    assert!(!state.is_default());
    assert_eq!(state.sticker(Face::Left, 0), &Color::from("#0f0"));
}

#[test]
fn short_face_is_rejected_on_decode() {
    let mut flat = CubeState::solved().to_flat();
    flat[3].pop();
    let json = serde_json::to_string(&flat).unwrap();
    let err = serde_json::from_str::<CubeState>(&json).unwrap_err();
    assert!(err.to_string().contains("face 3 has 8 stickers"), "{err}");
}

#[test]
fn moves_travel_as_tokens() {
    let moves = parse_sequence("R, U R' U'").unwrap();
    let json = serde_json::to_string(&moves).unwrap();
    assert_eq!(json, r#"["R","U","R'","U'"]"#);
    let back: Vec<Move> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, moves);
    assert!(serde_json::from_str::<Move>(r#""R2""#).is_err());
}

#[test]
fn scheme_and_faces_serialise_by_name() {
    assert_eq!(serde_json::to_string(&Face::Front).unwrap(), r#""front""#);
    let scheme = ColorScheme::default();
    let back: ColorScheme =
        serde_json::from_str(&serde_json::to_string(&scheme).unwrap()).unwrap();
    assert_eq!(back, scheme);
}
