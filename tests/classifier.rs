#[cfg(test)]
mod tests {
    use office_presence::libs::classifier::{classify, extract_document_name, is_tracked, truncate, RULES};
    use office_presence::libs::profile::DEFAULT_APP_KEY;

    #[test]
    fn test_is_tracked_process_names() {
        assert!(is_tracked("soffice.bin"));
        assert!(is_tracked("soffice"));
        assert!(is_tracked("libreoffice"));
        assert!(is_tracked("LibreOffice-Calc"));
        assert!(is_tracked("SOFFICE.BIN"));

        assert!(!is_tracked("firefox"));
        assert!(!is_tracked("code"));
        assert!(!is_tracked(""));
    }

    #[test]
    fn test_classify_by_keyword() {
        assert_eq!(classify("Report — LibreOffice Writer"), "swriter");
        assert_eq!(classify("Budget — LibreOffice Calc"), "scalc");
        assert_eq!(classify("Slides — LibreOffice Impress"), "simpress");
        assert_eq!(classify("Diagram — LibreOffice Draw"), "sdraw");
        assert_eq!(classify("Contacts — LibreOffice Base"), "sbase");
        assert_eq!(classify("Formula1 — LibreOffice Math"), "smath");
    }

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(classify("thesis.odt"), "swriter");
        assert_eq!(classify("letter.docx"), "swriter");
        assert_eq!(classify("numbers.ods"), "scalc");
        assert_eq!(classify("legacy.xlsx"), "scalc");
        assert_eq!(classify("talk.odp"), "simpress");
        assert_eq!(classify("pitch.pptx"), "simpress");
        assert_eq!(classify("floorplan.odg"), "sdraw");
        assert_eq!(classify("inventory.odb"), "sbase");
        assert_eq!(classify("equation.odf"), "smath");
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("REPORT.ODT"), "swriter");
        assert_eq!(classify("Budget - LIBREOFFICE CALC"), "scalc");
    }

    #[test]
    fn test_classify_every_single_trigger() {
        for rule in RULES.iter() {
            for trigger in rule.triggers {
                let title = format!("x{}y", trigger);
                assert_eq!(classify(&title), rule.profile.key, "trigger {:?}", trigger);
            }
        }
    }

    #[test]
    fn test_classify_falls_back_to_default() {
        assert_eq!(classify("Untitled — Notepad"), DEFAULT_APP_KEY);
        assert_eq!(classify("LibreOffice"), DEFAULT_APP_KEY);
        assert_eq!(classify("Start Center"), DEFAULT_APP_KEY);
        assert_eq!(classify(""), DEFAULT_APP_KEY);
    }

    #[test]
    fn test_classify_first_rule_wins() {
        // "writer" comes before "calc"
        assert_eq!(classify("calc notes — LibreOffice Writer"), "swriter");
        // "draw" comes before "base"
        assert_eq!(classify("database drawing.odg"), "sdraw");
        // ".doc" comes before ".xls"
        assert_eq!(classify("export.xls.doc"), "swriter");
    }

    #[test]
    fn test_extract_document_name_with_app_suffix() {
        assert_eq!(extract_document_name("Report — LibreOffice Writer"), "Report");
        assert_eq!(extract_document_name("Budget 2025.ods - LibreOffice Calc"), "Budget 2025.ods");
        assert_eq!(extract_document_name("Slides – LibreOffice Impress"), "Slides");
        assert_eq!(extract_document_name("  spaced   —   LibreOffice   Draw"), "spaced");
    }

    #[test]
    fn test_extract_document_name_with_generic_suffix() {
        assert_eq!(extract_document_name("Notes — LibreOffice"), "Notes");
        assert_eq!(extract_document_name("Notes — LibreOffice 24.2 Writer"), "Notes");
    }

    #[test]
    fn test_extract_document_name_keeps_inner_dashes() {
        assert_eq!(extract_document_name("Q1 - draft — LibreOffice Writer"), "Q1 - draft");
    }

    #[test]
    fn test_extract_document_name_without_suffix() {
        assert_eq!(extract_document_name("random title with no suffix"), "random title with no suffix");
        assert_eq!(extract_document_name("  padded title  "), "padded title");
        assert_eq!(extract_document_name("A — Writer"), "A — Writer");
    }

    #[test]
    fn test_extract_document_name_empty_prefix_is_not_a_match() {
        assert_eq!(extract_document_name("— LibreOffice Writer"), "— LibreOffice Writer");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdefghij", 5), "ab...");
        assert_eq!(truncate("abcdefghij", 5).chars().count(), 5);
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("abcde", 5), "abcde");
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("relatório anual", 10), "relatór...");
        assert_eq!(truncate("ãããããã", 5), "ãã...");
        assert_eq!(truncate("日本語のドキュメント", 6), "日本語...");
        assert_eq!(truncate("ção", 3), "ção");
    }
}
