use super::Entry;
use crate::domain::model::ConformanceLevel::{A, AA, AAA};

/// WCAG 2.1 success criteria in specification order, with Dutch titles.
pub(super) const WCAG21: &[Entry] = &[
    Entry::new(
        "1.1.1",
        A,
        "Non-text Content",
        "Niet-tekstuele content",
        "https://www.w3.org/TR/WCAG21/#non-text-content",
    ),
    Entry::new(
        "1.2.1",
        A,
        "Audio-only and Video-only (Prerecorded)",
        "Louter-geluid en louter-videobeeld (vooraf opgenomen)",
        "https://www.w3.org/TR/WCAG21/#audio-only-and-video-only-prerecorded",
    ),
    Entry::new(
        "1.2.2",
        A,
        "Captions (Prerecorded)",
        "Ondertitels voor doven en slechthorenden (vooraf opgenomen)",
        "https://www.w3.org/TR/WCAG21/#captions-prerecorded",
    ),
    Entry::new(
        "1.2.3",
        A,
        "Audio Description or Media Alternative (Prerecorded)",
        "Audiodescriptie of media-alternatief (vooraf opgenomen)",
        "https://www.w3.org/TR/WCAG21/#audio-description-or-media-alternative-prerecorded",
    ),
    Entry::new(
        "1.2.4",
        AA,
        "Captions (Live)",
        "Ondertitels voor doven en slechthorenden (live)",
        "https://www.w3.org/TR/WCAG21/#captions-live",
    ),
    Entry::new(
        "1.2.5",
        AA,
        "Audio Description (Prerecorded)",
        "Audiodescriptie (vooraf opgenomen)",
        "https://www.w3.org/TR/WCAG21/#audio-description-prerecorded",
    ),
    Entry::new(
        "1.2.6",
        AAA,
        "Sign Language (Prerecorded)",
        "Gebarentaal (vooraf opgenomen)",
        "https://www.w3.org/TR/WCAG21/#sign-language-prerecorded",
    ),
    Entry::new(
        "1.2.7",
        AAA,
        "Extended Audio Description (Prerecorded)",
        "Verlengde audiodescriptie (vooraf opgenomen)",
        "https://www.w3.org/TR/WCAG21/#extended-audio-description-prerecorded",
    ),
    Entry::new(
        "1.2.8",
        AAA,
        "Media Alternative (Prerecorded)",
        "Media-alternatief (vooraf opgenomen)",
        "https://www.w3.org/TR/WCAG21/#media-alternative-prerecorded",
    ),
    Entry::new(
        "1.2.9",
        AAA,
        "Audio-only (Live)",
        "Louter-geluid (live)",
        "https://www.w3.org/TR/WCAG21/#audio-only-live",
    ),
    Entry::new(
        "1.3.1",
        A,
        "Info and Relationships",
        "Info en relaties",
        "https://www.w3.org/TR/WCAG21/#info-and-relationships",
    ),
    Entry::new(
        "1.3.2",
        A,
        "Meaningful Sequence",
        "Betekenisvolle volgorde",
        "https://www.w3.org/TR/WCAG21/#meaningful-sequence",
    ),
    Entry::new(
        "1.3.3",
        A,
        "Sensory Characteristics",
        "Zintuiglijke eigenschappen",
        "https://www.w3.org/TR/WCAG21/#sensory-characteristics",
    ),
    Entry::new(
        "1.3.4",
        AA,
        "Orientation",
        "Weergavestand",
        "https://www.w3.org/TR/WCAG21/#orientation",
    ),
    Entry::new(
        "1.3.5",
        AA,
        "Identify Input Purpose",
        "Identificeer het doel van de input",
        "https://www.w3.org/TR/WCAG21/#identify-input-purpose",
    ),
    Entry::new(
        "1.3.6",
        AAA,
        "Identify Purpose",
        "Identificeer het doel",
        "https://www.w3.org/TR/WCAG21/#identify-purpose",
    ),
    Entry::new(
        "1.4.1",
        A,
        "Use of Color",
        "Gebruik van kleur",
        "https://www.w3.org/TR/WCAG21/#use-of-color",
    ),
    Entry::new(
        "1.4.2",
        A,
        "Audio Control",
        "Geluidsbediening",
        "https://www.w3.org/TR/WCAG21/#audio-control",
    ),
    Entry::new(
        "1.4.3",
        AA,
        "Contrast (Minimum)",
        "Contrast (minimum)",
        "https://www.w3.org/TR/WCAG21/#contrast-minimum",
    ),
    Entry::new(
        "1.4.4",
        AA,
        "Resize text",
        "Herschalen van tekst",
        "https://www.w3.org/TR/WCAG21/#resize-text",
    ),
    Entry::new(
        "1.4.5",
        AA,
        "Images of Text",
        "Afbeeldingen van tekst",
        "https://www.w3.org/TR/WCAG21/#images-of-text",
    ),
    Entry::new(
        "1.4.6",
        AAA,
        "Contrast (Enhanced)",
        "Contrast (versterkt)",
        "https://www.w3.org/TR/WCAG21/#contrast-enhanced",
    ),
    Entry::new(
        "1.4.7",
        AAA,
        "Low or No Background Audio",
        "Weinig of geen achtergrondgeluid",
        "https://www.w3.org/TR/WCAG21/#low-or-no-background-audio",
    ),
    Entry::new(
        "1.4.8",
        AAA,
        "Visual Presentation",
        "Visuele weergave",
        "https://www.w3.org/TR/WCAG21/#visual-presentation",
    ),
    Entry::new(
        "1.4.9",
        AAA,
        "Images of Text (No Exception)",
        "Afbeeldingen van tekst (geen uitzondering)",
        "https://www.w3.org/TR/WCAG21/#images-of-text-no-exception",
    ),
    Entry::new(
        "1.4.10",
        AA,
        "Reflow",
        "Reflow",
        "https://www.w3.org/TR/WCAG21/#reflow",
    ),
    Entry::new(
        "1.4.11",
        AA,
        "Non-text Contrast",
        "Contrast van niet-tekstuele content",
        "https://www.w3.org/TR/WCAG21/#non-text-contrast",
    ),
    Entry::new(
        "1.4.12",
        AA,
        "Text Spacing",
        "Tekstafstand",
        "https://www.w3.org/TR/WCAG21/#text-spacing",
    ),
    Entry::new(
        "1.4.13",
        AA,
        "Content on Hover or Focus",
        "Content bij hover of focus",
        "https://www.w3.org/TR/WCAG21/#content-on-hover-or-focus",
    ),
    Entry::new(
        "2.1.1",
        A,
        "Keyboard",
        "Toetsenbord",
        "https://www.w3.org/TR/WCAG21/#keyboard",
    ),
    Entry::new(
        "2.1.2",
        A,
        "No Keyboard Trap",
        "Geen toetsenbordval",
        "https://www.w3.org/TR/WCAG21/#no-keyboard-trap",
    ),
    Entry::new(
        "2.1.3",
        AAA,
        "Keyboard (No Exception)",
        "Toetsenbord (geen uitzondering)",
        "https://www.w3.org/TR/WCAG21/#keyboard-no-exception",
    ),
    Entry::new(
        "2.1.4",
        A,
        "Character Key Shortcuts",
        "Enkel teken sneltoetsen",
        "https://www.w3.org/TR/WCAG21/#character-key-shortcuts",
    ),
    Entry::new(
        "2.2.1",
        A,
        "Timing Adjustable",
        "Timing aanpasbaar",
        "https://www.w3.org/TR/WCAG21/#timing-adjustable",
    ),
    Entry::new(
        "2.2.2",
        A,
        "Pause, Stop, Hide",
        "Pauzeren, stoppen, verbergen",
        "https://www.w3.org/TR/WCAG21/#pause-stop-hide",
    ),
    Entry::new(
        "2.2.3",
        AAA,
        "No Timing",
        "Geen timing",
        "https://www.w3.org/TR/WCAG21/#no-timing",
    ),
    Entry::new(
        "2.2.4",
        AAA,
        "Interruptions",
        "Onderbrekingen",
        "https://www.w3.org/TR/WCAG21/#interruptions",
    ),
    Entry::new(
        "2.2.5",
        AAA,
        "Re-authenticating",
        "Herauthentisering",
        "https://www.w3.org/TR/WCAG21/#re-authenticating",
    ),
    Entry::new(
        "2.2.6",
        AAA,
        "Timeouts",
        "Time-outs",
        "https://www.w3.org/TR/WCAG21/#timeouts",
    ),
    Entry::new(
        "2.3.1",
        A,
        "Three Flashes or Below Threshold",
        "Drie flitsen of beneden drempelwaarde",
        "https://www.w3.org/TR/WCAG21/#three-flashes-or-below-threshold",
    ),
    Entry::new(
        "2.3.2",
        AAA,
        "Three Flashes",
        "Drie flitsen",
        "https://www.w3.org/TR/WCAG21/#three-flashes",
    ),
    Entry::new(
        "2.3.3",
        AAA,
        "Animation from Interactions",
        "Animatie uit interacties",
        "https://www.w3.org/TR/WCAG21/#animation-from-interactions",
    ),
    Entry::new(
        "2.4.1",
        A,
        "Bypass Blocks",
        "Blokken omzeilen",
        "https://www.w3.org/TR/WCAG21/#bypass-blocks",
    ),
    Entry::new(
        "2.4.2",
        A,
        "Page Titled",
        "Paginatitel",
        "https://www.w3.org/TR/WCAG21/#page-titled",
    ),
    Entry::new(
        "2.4.3",
        A,
        "Focus Order",
        "Focus volgorde",
        "https://www.w3.org/TR/WCAG21/#focus-order",
    ),
    Entry::new(
        "2.4.4",
        A,
        "Link Purpose (In Context)",
        "Linkdoel (in context)",
        "https://www.w3.org/TR/WCAG21/#link-purpose-in-context",
    ),
    Entry::new(
        "2.4.5",
        AA,
        "Multiple Ways",
        "Meerdere manieren",
        "https://www.w3.org/TR/WCAG21/#multiple-ways",
    ),
    Entry::new(
        "2.4.6",
        AA,
        "Headings and Labels",
        "Koppen en labels",
        "https://www.w3.org/TR/WCAG21/#headings-and-labels",
    ),
    Entry::new(
        "2.4.7",
        AA,
        "Focus Visible",
        "Focus zichtbaar",
        "https://www.w3.org/TR/WCAG21/#focus-visible",
    ),
    Entry::new(
        "2.4.8",
        AAA,
        "Location",
        "Locatie",
        "https://www.w3.org/TR/WCAG21/#location",
    ),
    Entry::new(
        "2.4.9",
        AAA,
        "Link Purpose (Link Only)",
        "Linkdoel (alleen link)",
        "https://www.w3.org/TR/WCAG21/#link-purpose-link-only",
    ),
    Entry::new(
        "2.4.10",
        AAA,
        "Section Headings",
        "Paragraafkoppen",
        "https://www.w3.org/TR/WCAG21/#section-headings",
    ),
    Entry::new(
        "2.5.1",
        A,
        "Pointer Gestures",
        "Aanwijzergebaren",
        "https://www.w3.org/TR/WCAG21/#pointer-gestures",
    ),
    Entry::new(
        "2.5.2",
        A,
        "Pointer Cancellation",
        "Aanwijzerannulering",
        "https://www.w3.org/TR/WCAG21/#pointer-cancellation",
    ),
    Entry::new(
        "2.5.3",
        A,
        "Label in Name",
        "Label in naam",
        "https://www.w3.org/TR/WCAG21/#label-in-name",
    ),
    Entry::new(
        "2.5.4",
        A,
        "Motion Actuation",
        "Bewegingsactivering",
        "https://www.w3.org/TR/WCAG21/#motion-actuation",
    ),
    Entry::new(
        "2.5.5",
        AAA,
        "Target Size",
        "Grootte van het aanwijsgebied (uitgebreid)",
        "https://www.w3.org/TR/WCAG21/#target-size",
    ),
    Entry::new(
        "2.5.6",
        AAA,
        "Concurrent Input Mechanisms",
        "Input gelijktijdige invoermechanismen",
        "https://www.w3.org/TR/WCAG21/#concurrent-input-mechanisms",
    ),
    Entry::new(
        "3.1.1",
        A,
        "Language of Page",
        "Taal van de pagina",
        "https://www.w3.org/TR/WCAG21/#language-of-page",
    ),
    Entry::new(
        "3.1.2",
        AA,
        "Language of Parts",
        "Taal van onderdelen",
        "https://www.w3.org/TR/WCAG21/#language-of-parts",
    ),
    Entry::new(
        "3.1.3",
        AAA,
        "Unusual Words",
        "Ongebruikelijke woorden",
        "https://www.w3.org/TR/WCAG21/#unusual-words",
    ),
    Entry::new(
        "3.1.4",
        AAA,
        "Abbreviations",
        "Afkortingen",
        "https://www.w3.org/TR/WCAG21/#abbreviations",
    ),
    Entry::new(
        "3.1.5",
        AAA,
        "Reading Level",
        "Leesniveau",
        "https://www.w3.org/TR/WCAG21/#reading-level",
    ),
    Entry::new(
        "3.1.6",
        AAA,
        "Pronunciation",
        "Uitspraak",
        "https://www.w3.org/TR/WCAG21/#pronunciation",
    ),
    Entry::new(
        "3.2.1",
        A,
        "On Focus",
        "Bij focus",
        "https://www.w3.org/TR/WCAG21/#on-focus",
    ),
    Entry::new(
        "3.2.2",
        A,
        "On Input",
        "Bij input",
        "https://www.w3.org/TR/WCAG21/#on-input",
    ),
    Entry::new(
        "3.2.3",
        AA,
        "Consistent Navigation",
        "Consistente navigatie",
        "https://www.w3.org/TR/WCAG21/#consistent-navigation",
    ),
    Entry::new(
        "3.2.4",
        AA,
        "Consistent Identification",
        "Consistente identificatie",
        "https://www.w3.org/TR/WCAG21/#consistent-identification",
    ),
    Entry::new(
        "3.2.5",
        AAA,
        "Change on Request",
        "Verandering op verzoek",
        "https://www.w3.org/TR/WCAG21/#change-on-request",
    ),
    Entry::new(
        "3.3.1",
        A,
        "Error Identification",
        "Foutidentificatie",
        "https://www.w3.org/TR/WCAG21/#error-identification",
    ),
    Entry::new(
        "3.3.2",
        A,
        "Labels or Instructions",
        "Labels of instructies",
        "https://www.w3.org/TR/WCAG21/#labels-or-instructions",
    ),
    Entry::new(
        "3.3.3",
        AA,
        "Error Suggestion",
        "Foutsuggestie",
        "https://www.w3.org/TR/WCAG21/#error-suggestion",
    ),
    Entry::new(
        "3.3.4",
        AA,
        "Error Prevention (Legal, Financial, Data)",
        "Foutpreventie (wettelijk, financieel, gegevens)",
        "https://www.w3.org/TR/WCAG21/#error-prevention-legal-financial-data",
    ),
    Entry::new(
        "3.3.5",
        AAA,
        "Help",
        "Hulp",
        "https://www.w3.org/TR/WCAG21/#help",
    ),
    Entry::new(
        "3.3.6",
        AAA,
        "Error Prevention (All)",
        "Foutpreventie (alle)",
        "https://www.w3.org/TR/WCAG21/#error-prevention-all",
    ),
    Entry::new(
        "4.1.1",
        A,
        "Parsing",
        "Parsen",
        "https://www.w3.org/TR/WCAG21/#parsing",
    ),
    Entry::new(
        "4.1.2",
        A,
        "Name, Role, Value",
        "Naam, rol, waarde",
        "https://www.w3.org/TR/WCAG21/#name-role-value",
    ),
    Entry::new(
        "4.1.3",
        AA,
        "Status Messages",
        "Statusberichten",
        "https://www.w3.org/TR/WCAG21/#status-messages",
    ),
];
