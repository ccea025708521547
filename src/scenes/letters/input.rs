use super::{ActiveState, Symbol};

/// Scans the frame's event payloads in order and emits at most one
/// activation. The first payload that parses as a symbol decides the whole
/// frame: if it matches the still-active symbol it is swallowed (debounce),
/// otherwise it activates. Later payloads are not consulted.
pub(super) fn first_activation<'a>(
    state: &ActiveState,
    payloads: impl IntoIterator<Item = &'a str>,
) -> Option<Symbol> {
    for payload in payloads {
        let Some(symbol) = Symbol::from_payload(payload) else {
            continue;
        };
        if state.symbol == Some(symbol) {
            return None;
        }
        return Some(symbol);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::letters::ResourceKey;

    fn sym(ch: char) -> Symbol {
        Symbol::from_payload(&ch.to_string()).expect("test symbol should parse")
    }

    fn active(ch: char) -> ActiveState {
        let mut state = ActiveState::default();
        state.activate(&ResourceKey {
            symbol: sym(ch),
            variant: String::from("cat"),
        });
        state
    }

    #[test]
    fn payloads_are_uppercased_single_alphanumerics() {
        assert_eq!(Symbol::from_payload("a"), Some(sym('A')));
        assert_eq!(Symbol::from_payload("Z"), Some(sym('Z')));
        assert_eq!(Symbol::from_payload("7"), Some(sym('7')));
        assert_eq!(Symbol::from_payload("ab"), None);
        assert_eq!(Symbol::from_payload("!"), None);
        assert_eq!(Symbol::from_payload(""), None);
        assert_eq!(Symbol::from_payload("ß"), None);
    }

    #[test]
    fn first_symbol_payload_wins() {
        let state = ActiveState::default();
        assert_eq!(first_activation(&state, ["!", "b", "c"]), Some(sym('B')));
    }

    #[test]
    fn repeat_of_the_active_symbol_is_swallowed() {
        let state = active('B');
        assert_eq!(first_activation(&state, ["b"]), None);
    }

    #[test]
    fn a_swallowed_repeat_ends_the_frame() {
        // "B" is the first candidate, so the later "c" is never consulted.
        let state = active('B');
        assert_eq!(first_activation(&state, ["b", "c"]), None);
    }

    #[test]
    fn different_symbol_activates_while_active() {
        let state = active('B');
        assert_eq!(first_activation(&state, ["c"]), Some(sym('C')));
    }

    #[test]
    fn non_symbol_payloads_are_ignored_entirely() {
        let state = ActiveState::default();
        assert_eq!(first_activation(&state, ["!", "", "ab", "  "]), None);
    }
}
