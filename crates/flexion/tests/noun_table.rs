//! End-to-end tests for the noun-table extractor: full invocations in,
//! word forms on the entry out.

use flexion::{
    Case, Entry, ExtractionWarning, Gender, NounTableExtractor, Number, ParseContext, pairs,
};

#[test]
fn basic_table_yields_singular_and_plural_forms() {
    let mut entry = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Genus" => "m",
            "Nominativ Singular" => "Hund",
            "Nominativ Plural" => "Hunde",
        },
        &mut ctx,
    );

    let forms = entry.word_forms();
    assert_eq!(forms.len(), 2);

    assert_eq!(forms[0].form.as_deref(), Some("Hund"));
    assert_eq!(forms[0].case, Some(Case::Nominative));
    assert_eq!(forms[0].number, Some(Number::Singular));
    assert_eq!(forms[0].gender, Some(Gender::Masculine));
    assert_eq!(forms[0].inflection_group, 1);

    assert_eq!(forms[1].form.as_deref(), Some("Hunde"));
    assert_eq!(forms[1].case, Some(Case::Nominative));
    assert_eq!(forms[1].number, Some(Number::Plural));
    assert_eq!(forms[1].gender, Some(Gender::Masculine));
    assert_eq!(forms[1].inflection_group, 1);
}

#[test]
fn full_paradigm_is_extracted_in_completion_order() {
    let mut entry = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Genus" => "m",
            "Nominativ Singular" => "Hund",
            "Nominativ Plural" => "Hunde",
            "Genitiv Singular" => "Hundes",
            "Genitiv Plural" => "Hunde",
            "Dativ Singular" => "Hund",
            "Dativ Plural" => "Hunden",
            "Akkusativ Singular" => "Hund",
            "Akkusativ Plural" => "Hunde",
        },
        &mut ctx,
    );

    let forms = entry.word_forms();
    assert_eq!(forms.len(), 8);

    let expected = [
        (Case::Nominative, Number::Singular, "Hund"),
        (Case::Nominative, Number::Plural, "Hunde"),
        (Case::Genitive, Number::Singular, "Hundes"),
        (Case::Genitive, Number::Plural, "Hunde"),
        (Case::Dative, Number::Singular, "Hund"),
        (Case::Dative, Number::Plural, "Hunden"),
        (Case::Accusative, Number::Singular, "Hund"),
        (Case::Accusative, Number::Plural, "Hunde"),
    ];
    for (form, (case, number, text)) in forms.iter().zip(expected) {
        assert_eq!(form.case, Some(case));
        assert_eq!(form.number, Some(number));
        assert_eq!(form.form.as_deref(), Some(text));
        assert_eq!(form.gender, Some(Gender::Masculine));
        assert_eq!(form.inflection_group, 1);
    }
}

#[test]
fn numbered_columns_keep_their_own_genus() {
    let mut entry = Entry::new("Band");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Genus 1" => "n",
            "Genus 2" => "f",
            "Nominativ Singular 1" => "Band",
            "Nominativ Singular 2" => "Band",
        },
        &mut ctx,
    );

    let forms = entry.word_forms();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].inflection_group, 1);
    assert_eq!(forms[0].gender, Some(Gender::Neuter));
    assert_eq!(forms[1].inflection_group, 2);
    assert_eq!(forms[1].gender, Some(Gender::Feminine));
}

#[test]
fn a_second_invocation_starts_a_new_block() {
    let mut entry = Entry::new("Wort");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Genus" => "n",
            "Nominativ Singular" => "Wort",
        },
        &mut ctx,
    );
    extractor.process_invocation(
        pairs! {
            "Genus" => "n",
            "Nominativ Plural" => "Wörter",
        },
        &mut ctx,
    );

    let forms = entry.word_forms();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].inflection_group, 1);
    assert_eq!(forms[1].inflection_group, 5);
    assert_eq!(forms[1].gender, Some(Gender::Neuter));
}

#[test]
fn placeholder_cells_produce_no_forms() {
    let mut entry = Entry::new("Leid");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Genus" => "n",
            "Nominativ Singular" => "Leid",
            "Nominativ Plural" => "\u{2014}",
            "Genitiv Plural" => "-",
        },
        &mut ctx,
    );

    let forms = entry.word_forms();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].form.as_deref(), Some("Leid"));
}

#[test]
fn unrecognized_labels_are_dropped_silently() {
    let mut entry = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Bild" => "Hund.jpg",
            "Hyphenation" => "Hund",
            "Nominativ Singular" => "Hund",
        },
        &mut ctx,
    );

    assert!(ctx.warnings().is_empty());
    assert_eq!(entry.word_forms().len(), 1);
}

#[test]
fn genus_only_invocation_appends_nothing() {
    let mut entry = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(pairs! { "Genus" => "m" }, &mut ctx);

    assert!(entry.word_forms().is_empty());
}

#[test]
fn empty_invocation_is_a_no_op() {
    let mut entry = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(pairs! {}, &mut ctx);

    assert!(ctx.warnings().is_empty());
    assert!(entry.word_forms().is_empty());
}

#[test]
fn unknown_genus_value_is_reported_through_the_warning_channel() {
    let mut entry = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Genus" => "??",
            "Nominativ Singular" => "Hund",
        },
        &mut ctx,
    );

    assert_eq!(
        ctx.take_warnings(),
        vec![ExtractionWarning::UnknownGenus {
            value: "??".to_string()
        }]
    );
    assert_eq!(entry.word_forms().len(), 1);
    assert_eq!(entry.word_forms()[0].gender, None);
}

#[test]
fn legacy_einzahl_and_mehrzahl_labels_set_number() {
    let mut entry = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut entry);
    let mut extractor = NounTableExtractor::new().unwrap();

    extractor.process_invocation(
        pairs! {
            "Wer oder was? (Einzahl)" => "Hund",
            "Wer oder was? (Mehrzahl)" => "Hunde",
        },
        &mut ctx,
    );

    let forms = entry.word_forms();
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].number, Some(Number::Singular));
    assert_eq!(forms[0].case, None);
    assert_eq!(forms[1].number, Some(Number::Plural));
}

#[test]
fn reset_isolates_consecutive_entries() {
    let mut extractor = NounTableExtractor::new().unwrap();

    let mut first = Entry::new("Hund");
    let mut ctx = ParseContext::new(&mut first);
    extractor.process_invocation(
        pairs! {
            "Genus" => "m",
            "Nominativ Singular" => "Hund",
        },
        &mut ctx,
    );
    assert_eq!(first.word_forms()[0].gender, Some(Gender::Masculine));

    extractor.reset();

    let mut second = Entry::new("Katze");
    let mut ctx = ParseContext::new(&mut second);
    extractor.process_invocation(pairs! { "Nominativ Singular" => "Katze" }, &mut ctx);

    let forms = second.word_forms();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].inflection_group, 1);
    assert_eq!(forms[0].gender, None);
}
