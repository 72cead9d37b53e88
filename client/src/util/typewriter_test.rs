use super::*;

fn run_until_word(tw: &mut Typewriter, word: usize) -> Vec<u32> {
    let mut delays = Vec::new();
    while tw.word_index() != word {
        delays.push(tw.tick());
        assert!(delays.len() < 1000, "typewriter never reached word {word}");
    }
    delays
}

#[test]
fn starts_empty_on_first_word() {
    let tw = Typewriter::new(["Rust", "Web"]);
    assert_eq!(tw.text(), "");
    assert_eq!(tw.word_index(), 0);
}

#[test]
fn types_one_character_per_tick() {
    let mut tw = Typewriter::new(["Rust"]);
    assert_eq!(tw.tick(), TYPE_DELAY_MS);
    assert_eq!(tw.text(), "R");
    assert_eq!(tw.tick(), TYPE_DELAY_MS);
    assert_eq!(tw.text(), "Ru");
}

#[test]
fn holds_after_completing_a_word() {
    let mut tw = Typewriter::new(["ab", "cd"]);
    tw.tick();
    assert_eq!(tw.tick(), HOLD_DELAY_MS);
    assert_eq!(tw.text(), "ab");
}

#[test]
fn deletes_then_moves_to_next_word() {
    let mut tw = Typewriter::new(["ab", "cd"]);
    tw.tick();
    tw.tick();
    assert_eq!(tw.tick(), DELETE_DELAY_MS);
    assert_eq!(tw.text(), "a");
    assert_eq!(tw.tick(), NEXT_DELAY_MS);
    assert_eq!(tw.word_index(), 1);
    assert_eq!(tw.text(), "");
}

#[test]
fn cycles_back_to_first_word() {
    let mut tw = Typewriter::new(["ab", "cd", "ef"]);
    run_until_word(&mut tw, 1);
    run_until_word(&mut tw, 2);
    let delays = run_until_word(&mut tw, 0);
    assert!(delays.contains(&HOLD_DELAY_MS));
    assert_eq!(delays.last(), Some(&NEXT_DELAY_MS));
}

#[test]
fn handles_multibyte_characters() {
    let mut tw = Typewriter::new(["héllo"]);
    tw.tick();
    tw.tick();
    assert_eq!(tw.text(), "hé");
}

#[test]
fn empty_word_list_is_inert() {
    let mut tw = Typewriter::new(Vec::<String>::new());
    assert_eq!(tw.tick(), HOLD_DELAY_MS);
    assert_eq!(tw.text(), "");
}
