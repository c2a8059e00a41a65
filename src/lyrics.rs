//! The fixed block of text the tool reports on.

/// Lyric of "Griechischer Wein", one verse line per line, no trailing break.
pub const GRIECHISCHER_WEIN: &str = "\
Es war schon dunkel\n\
Als ich durch Vorstadtstraßen heimwärts ging\n\
Da war ein Wirtshaus\n\
Aus dem das Licht noch auf den Gehsteig schien\n\
Ich hatte Zeit und mir war kalt, drum trat ich ein\n\
Da saßen Männer mit braunen\n\
Augen und mit schwarzem Haar\n\
Und aus der Jukebox erklang Musik\n\
Die fremd und südlich war\n\
Als man mich sah\n\
Stand einer auf und lud mich ein\n\
Griechischer Wein ist\n\
So wie das Blut der Erde\n\
Komm', schenk dir ein\n\
Und wenn ich dann traurig werde\n\
Liegt es daran\n\
Dass ich immer träume von daheim\n\
Du musst verzeihen\n\
Griechischer Wein\n\
Und die altvertrauten Lieder\n\
Schenk' nochmal ein\n\
Denn ich fühl' die Sehnsucht\n\
Wieder, in dieser Stadt\n\
Werd' ich immer nur ein Fremder sein, und allein\n\
Und dann erzählten sie mir von grünen Hügeln, Meer und Wind\n\
Von alten Häusern und jungen Frauen, die alleine sind\n\
Und von dem Kind das seinen Vater noch nie sah\n\
Sie sagten sich immer wieder\n\
Irgendwann geht es zurück\n\
Und das Ersparte genügt zu\n\
Hause für ein kleines Glück\n\
Und bald denkt keiner mehr daran\n\
Wie es hier war\n\
Griechischer Wein ist\n\
So wie das Blut der Erde\n\
Komm', schenk dir ein\n\
Und wenn ich dann traurig werde\n\
Liegt es daran\n\
Dass ich immer träume von daheim\n\
Du musst verzeihen\n\
Griechischer Wein\n\
Und die altvertrauten Lieder\n\
Schenk' nochmal ein,\n\
Denn ich fühl' die Sehnsucht\n\
Wieder, in dieser Stadt\n\
Werd' ich immer nur ein Fremder sein, und allein";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lyric_shape() {
        assert!(GRIECHISCHER_WEIN.starts_with("Es war schon dunkel\n"));
        assert!(GRIECHISCHER_WEIN.ends_with("ein Fremder sein, und allein"));
        assert_eq!(GRIECHISCHER_WEIN.split('\n').count(), 46);
        assert_eq!(GRIECHISCHER_WEIN.chars().filter(|c| *c != '\n').count(), 1300);
    }
}
