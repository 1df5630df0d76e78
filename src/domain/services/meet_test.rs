use super::Meet;

#[test]
fn it_builds_a_link_with_an_encoded_title() {
    assert_eq!(
        Meet::link("Mock Interview: Java & System Design"),
        "https://meet.google.com/new?title=Mock%20Interview%3A%20Java%20%26%20System%20Design"
    );
}

#[test]
fn it_falls_back_to_the_default_title() {
    assert_eq!(
        Meet::link("   "),
        "https://meet.google.com/new?title=IntelliPrep%20Virtual%20Interview"
    );
}
