#![no_main]

use editable::{ControlKind, EditableController, EditableOptions, MemoryClipboard, NativeControlHost};
use input_core::{
    EditEvent, InputId, InputValueStore, Key, char_count, clamp_to_char_boundary,
};
use libfuzzer_sys::fuzz_target;

const MAX_LEN: usize = 24;
const ALPHABET: [&str; 6] = ["a", "€", "\n", "\r\n", "xy", ""];

fn event(op: u8, arg: u8) -> EditEvent {
    let data = ALPHABET[arg as usize % ALPHABET.len()];
    match op % 6 {
        0 => EditEvent::text_input(data),
        1 => EditEvent::paste(data.repeat(1 + arg as usize % 4)),
        2 => EditEvent::cut(),
        3 => EditEvent::key_down(Key::Backspace),
        4 => EditEvent::key_down(Key::Delete),
        _ => EditEvent::key_down(Key::from_name("ArrowLeft")),
    }
}

fuzz_target!(|data: &[u8]| {
    let id = InputId::from_raw(1);
    let mut store = InputValueStore::new();
    store.ensure_initial(id, String::new());

    let opts = EditableOptions {
        max_length: Some(MAX_LEN),
        ..EditableOptions::default()
    };
    let mut ctl = EditableController::new(opts, false);
    let mut clipboard = MemoryClipboard::new();

    for chunk in data.chunks_exact(4) {
        let [op, arg, a, b] = [chunk[0], chunk[1], chunk[2], chunk[3]];
        // Arbitrary, possibly out-of-range selection; the controller clamps it.
        store.set_selection_range(id, a as usize, b as usize);

        let mut ev = event(op, arg);
        let mut host = NativeControlHost::new(&mut store, id, ControlKind::TextArea);
        let Ok(outcome) = pollster::block_on(ctl.apply(&mut ev, &mut host, &mut clipboard)) else {
            panic!("edit without a transform failed");
        };

        if let Some(state) = outcome.state() {
            let text = state.value.render();
            assert!(char_count(&text) <= MAX_LEN);
            assert!(!text.contains('\r'));
            assert!(state.caret_start <= state.caret_end && state.caret_end <= text.len());
            assert_eq!(clamp_to_char_boundary(&text, state.caret_start), state.caret_start);
            assert_eq!(store.get(id), Some(text.as_str()));
            assert_eq!(store.selection(id), Some(state.selection()));
        }
    }
});
