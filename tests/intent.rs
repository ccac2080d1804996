use ivan::intent::is_image_request;

#[test]
fn test_hebrew_triggers() {
    assert!(is_image_request("תצייר חתום"));
    assert!(is_image_request("אפשר תמונה של חוף הים?"));
    assert!(is_image_request("צייר לי דרקון"));
    assert!(is_image_request("תייצר תמונה של הר"));
    assert!(is_image_request("צור משהו יפה"));
}

#[test]
fn test_english_triggers() {
    assert!(is_image_request("generate image of a sunset"));
    assert!(is_image_request("show me a picture of a cat"));
    assert!(is_image_request("draw a map of the city"));
    assert!(is_image_request("visualize the data"));
}

#[test]
fn test_triggers_are_case_insensitive() {
    assert!(is_image_request("PICTURE of a cat"));
    assert!(is_image_request("Generate Image please"));
}

#[test]
fn test_plain_conversation_is_not_an_image_request() {
    assert!(!is_image_request("שלום"));
    assert!(!is_image_request("מה שלומך היום?"));
    assert!(!is_image_request("what is the capital of France"));
    assert!(!is_image_request(""));
}
