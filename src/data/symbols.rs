//! Unicode symbols offered by the "Symbols" catalog entry, in display order.

pub const SYMBOLS: &[(&str, &str)] = &[
    // Arrows
    ("→", "RIGHTWARDS ARROW"),
    ("←", "LEFTWARDS ARROW"),
    ("↑", "UPWARDS ARROW"),
    ("↓", "DOWNWARDS ARROW"),
    ("↔", "LEFT RIGHT ARROW"),
    ("↕", "UP DOWN ARROW"),
    ("↖", "NORTH WEST ARROW"),
    ("↗", "NORTH EAST ARROW"),
    ("↘", "SOUTH EAST ARROW"),
    ("↙", "SOUTH WEST ARROW"),
    ("↩", "LEFTWARDS ARROW WITH HOOK"),
    ("↪", "RIGHTWARDS ARROW WITH HOOK"),
    ("↵", "DOWNWARDS ARROW WITH CORNER LEFTWARDS"),
    ("⇒", "RIGHTWARDS DOUBLE ARROW"),
    ("⇐", "LEFTWARDS DOUBLE ARROW"),
    ("⇑", "UPWARDS DOUBLE ARROW"),
    ("⇓", "DOWNWARDS DOUBLE ARROW"),
    ("⇔", "LEFT RIGHT DOUBLE ARROW"),
    ("⇄", "RIGHTWARDS ARROW OVER LEFTWARDS ARROW"),
    ("⇆", "LEFTWARDS ARROW OVER RIGHTWARDS ARROW"),
    ("⟶", "LONG RIGHTWARDS ARROW"),
    ("⟵", "LONG LEFTWARDS ARROW"),
    ("⟹", "LONG RIGHTWARDS DOUBLE ARROW"),
    ("↦", "RIGHTWARDS ARROW FROM BAR"),
    ("↻", "CLOCKWISE OPEN CIRCLE ARROW"),
    ("↺", "ANTICLOCKWISE OPEN CIRCLE ARROW"),
    ("➜", "HEAVY ROUND-TIPPED RIGHTWARDS ARROW"),
    ("➔", "HEAVY WIDE-HEADED RIGHTWARDS ARROW"),
    // Mathematical operators
    ("±", "PLUS-MINUS SIGN"),
    ("∓", "MINUS-OR-PLUS SIGN"),
    ("×", "MULTIPLICATION SIGN"),
    ("÷", "DIVISION SIGN"),
    ("−", "MINUS SIGN"),
    ("⋅", "DOT OPERATOR"),
    ("∘", "RING OPERATOR"),
    ("√", "SQUARE ROOT"),
    ("∛", "CUBE ROOT"),
    ("∞", "INFINITY"),
    ("≈", "ALMOST EQUAL TO"),
    ("≠", "NOT EQUAL TO"),
    ("≡", "IDENTICAL TO"),
    ("≤", "LESS-THAN OR EQUAL TO"),
    ("≥", "GREATER-THAN OR EQUAL TO"),
    ("≪", "MUCH LESS-THAN"),
    ("≫", "MUCH GREATER-THAN"),
    ("∝", "PROPORTIONAL TO"),
    ("∑", "N-ARY SUMMATION"),
    ("∏", "N-ARY PRODUCT"),
    ("∫", "INTEGRAL"),
    ("∬", "DOUBLE INTEGRAL"),
    ("∮", "CONTOUR INTEGRAL"),
    ("∂", "PARTIAL DIFFERENTIAL"),
    ("∇", "NABLA"),
    ("∆", "INCREMENT"),
    ("∀", "FOR ALL"),
    ("∃", "THERE EXISTS"),
    ("∄", "THERE DOES NOT EXIST"),
    ("∅", "EMPTY SET"),
    ("∈", "ELEMENT OF"),
    ("∉", "NOT AN ELEMENT OF"),
    ("∋", "CONTAINS AS MEMBER"),
    ("⊂", "SUBSET OF"),
    ("⊃", "SUPERSET OF"),
    ("⊆", "SUBSET OF OR EQUAL TO"),
    ("⊇", "SUPERSET OF OR EQUAL TO"),
    ("∩", "INTERSECTION"),
    ("∪", "UNION"),
    ("∧", "LOGICAL AND"),
    ("∨", "LOGICAL OR"),
    ("¬", "NOT SIGN"),
    ("⊕", "CIRCLED PLUS"),
    ("⊗", "CIRCLED TIMES"),
    ("⊥", "UP TACK"),
    ("⊢", "RIGHT TACK"),
    ("⊨", "TRUE"),
    ("∴", "THEREFORE"),
    ("∵", "BECAUSE"),
    ("∠", "ANGLE"),
    ("∥", "PARALLEL TO"),
    ("°", "DEGREE SIGN"),
    ("′", "PRIME"),
    ("″", "DOUBLE PRIME"),
    ("‰", "PER MILLE SIGN"),
    ("ℵ", "ALEF SYMBOL"),
    ("ℕ", "DOUBLE-STRUCK CAPITAL N"),
    ("ℤ", "DOUBLE-STRUCK CAPITAL Z"),
    ("ℚ", "DOUBLE-STRUCK CAPITAL Q"),
    ("ℝ", "DOUBLE-STRUCK CAPITAL R"),
    ("ℂ", "DOUBLE-STRUCK CAPITAL C"),
    // Fractions, super- and subscripts
    ("½", "VULGAR FRACTION ONE HALF"),
    ("⅓", "VULGAR FRACTION ONE THIRD"),
    ("⅔", "VULGAR FRACTION TWO THIRDS"),
    ("¼", "VULGAR FRACTION ONE QUARTER"),
    ("¾", "VULGAR FRACTION THREE QUARTERS"),
    ("⅛", "VULGAR FRACTION ONE EIGHTH"),
    ("⁰", "SUPERSCRIPT ZERO"),
    ("¹", "SUPERSCRIPT ONE"),
    ("²", "SUPERSCRIPT TWO"),
    ("³", "SUPERSCRIPT THREE"),
    ("ⁿ", "SUPERSCRIPT LATIN SMALL LETTER N"),
    ("₀", "SUBSCRIPT ZERO"),
    ("₁", "SUBSCRIPT ONE"),
    ("₂", "SUBSCRIPT TWO"),
    // Greek letters
    ("α", "GREEK SMALL LETTER ALPHA"),
    ("β", "GREEK SMALL LETTER BETA"),
    ("γ", "GREEK SMALL LETTER GAMMA"),
    ("δ", "GREEK SMALL LETTER DELTA"),
    ("ε", "GREEK SMALL LETTER EPSILON"),
    ("ζ", "GREEK SMALL LETTER ZETA"),
    ("η", "GREEK SMALL LETTER ETA"),
    ("θ", "GREEK SMALL LETTER THETA"),
    ("ι", "GREEK SMALL LETTER IOTA"),
    ("κ", "GREEK SMALL LETTER KAPPA"),
    ("λ", "GREEK SMALL LETTER LAMDA"),
    ("μ", "GREEK SMALL LETTER MU"),
    ("ν", "GREEK SMALL LETTER NU"),
    ("ξ", "GREEK SMALL LETTER XI"),
    ("π", "GREEK SMALL LETTER PI"),
    ("ρ", "GREEK SMALL LETTER RHO"),
    ("σ", "GREEK SMALL LETTER SIGMA"),
    ("τ", "GREEK SMALL LETTER TAU"),
    ("υ", "GREEK SMALL LETTER UPSILON"),
    ("φ", "GREEK SMALL LETTER PHI"),
    ("χ", "GREEK SMALL LETTER CHI"),
    ("ψ", "GREEK SMALL LETTER PSI"),
    ("ω", "GREEK SMALL LETTER OMEGA"),
    ("Γ", "GREEK CAPITAL LETTER GAMMA"),
    ("Δ", "GREEK CAPITAL LETTER DELTA"),
    ("Θ", "GREEK CAPITAL LETTER THETA"),
    ("Λ", "GREEK CAPITAL LETTER LAMDA"),
    ("Π", "GREEK CAPITAL LETTER PI"),
    ("Σ", "GREEK CAPITAL LETTER SIGMA"),
    ("Φ", "GREEK CAPITAL LETTER PHI"),
    ("Ψ", "GREEK CAPITAL LETTER PSI"),
    ("Ω", "GREEK CAPITAL LETTER OMEGA"),
    // Currency
    ("€", "EURO SIGN"),
    ("£", "POUND SIGN"),
    ("¥", "YEN SIGN"),
    ("¢", "CENT SIGN"),
    ("₹", "INDIAN RUPEE SIGN"),
    ("₽", "RUBLE SIGN"),
    ("₩", "WON SIGN"),
    ("₪", "NEW SHEQEL SIGN"),
    ("₿", "BITCOIN SIGN"),
    ("¤", "CURRENCY SIGN"),
    // Punctuation and typography
    ("–", "EN DASH"),
    ("—", "EM DASH"),
    ("…", "HORIZONTAL ELLIPSIS"),
    ("•", "BULLET"),
    ("·", "MIDDLE DOT"),
    ("‘", "LEFT SINGLE QUOTATION MARK"),
    ("’", "RIGHT SINGLE QUOTATION MARK"),
    ("“", "LEFT DOUBLE QUOTATION MARK"),
    ("”", "RIGHT DOUBLE QUOTATION MARK"),
    ("„", "DOUBLE LOW-9 QUOTATION MARK"),
    ("«", "LEFT-POINTING DOUBLE ANGLE QUOTATION MARK"),
    ("»", "RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK"),
    ("‹", "SINGLE LEFT-POINTING ANGLE QUOTATION MARK"),
    ("›", "SINGLE RIGHT-POINTING ANGLE QUOTATION MARK"),
    ("¡", "INVERTED EXCLAMATION MARK"),
    ("¿", "INVERTED QUESTION MARK"),
    ("§", "SECTION SIGN"),
    ("¶", "PILCROW SIGN"),
    ("†", "DAGGER"),
    ("‡", "DOUBLE DAGGER"),
    ("©", "COPYRIGHT SIGN"),
    ("®", "REGISTERED SIGN"),
    ("™", "TRADE MARK SIGN"),
    ("℃", "DEGREE CELSIUS"),
    ("℉", "DEGREE FAHRENHEIT"),
    ("№", "NUMERO SIGN"),
    ("\u{a0}", "NO-BREAK SPACE"),
    ("\u{200b}", "ZERO WIDTH SPACE"),
    // Keyboard and technical
    ("⌘", "PLACE OF INTEREST SIGN"),
    ("⌥", "OPTION KEY"),
    ("⇧", "UPWARDS WHITE ARROW"),
    ("⌃", "UP ARROWHEAD"),
    ("⎋", "BROKEN CIRCLE WITH NORTHWEST ARROW"),
    ("⌫", "ERASE TO THE LEFT"),
    ("⌦", "ERASE TO THE RIGHT"),
    ("⏎", "RETURN SYMBOL"),
    ("⇥", "RIGHTWARDS ARROW TO BAR"),
    ("⏏", "EJECT SYMBOL"),
    ("⌀", "DIAMETER SIGN"),
    ("⌚", "WATCH"),
    ("⌛", "HOURGLASS"),
    // Check marks and shapes
    ("✓", "CHECK MARK"),
    ("✔", "HEAVY CHECK MARK"),
    ("✗", "BALLOT X"),
    ("✘", "HEAVY BALLOT X"),
    ("☐", "BALLOT BOX"),
    ("☑", "BALLOT BOX WITH CHECK"),
    ("☒", "BALLOT BOX WITH X"),
    ("★", "BLACK STAR"),
    ("☆", "WHITE STAR"),
    ("●", "BLACK CIRCLE"),
    ("○", "WHITE CIRCLE"),
    ("■", "BLACK SQUARE"),
    ("□", "WHITE SQUARE"),
    ("▲", "BLACK UP-POINTING TRIANGLE"),
    ("▼", "BLACK DOWN-POINTING TRIANGLE"),
    ("◆", "BLACK DIAMOND"),
    ("◇", "WHITE DIAMOND"),
    ("♠", "BLACK SPADE SUIT"),
    ("♣", "BLACK CLUB SUIT"),
    ("♥", "BLACK HEART SUIT"),
    ("♦", "BLACK DIAMOND SUIT"),
    ("♪", "EIGHTH NOTE"),
    ("♫", "BEAMED EIGHTH NOTES"),
    ("☀", "BLACK SUN WITH RAYS"),
    ("☁", "CLOUD"),
    ("☂", "UMBRELLA"),
    ("☃", "SNOWMAN"),
    ("☎", "BLACK TELEPHONE"),
    ("☕", "HOT BEVERAGE"),
    ("☯", "YIN YANG"),
    ("☮", "PEACE SYMBOL"),
    ("⚠", "WARNING SIGN"),
    ("⚡", "HIGH VOLTAGE SIGN"),
    ("♻", "BLACK UNIVERSAL RECYCLING SYMBOL"),
    // Box drawing
    ("─", "BOX DRAWINGS LIGHT HORIZONTAL"),
    ("│", "BOX DRAWINGS LIGHT VERTICAL"),
    ("┌", "BOX DRAWINGS LIGHT DOWN AND RIGHT"),
    ("┐", "BOX DRAWINGS LIGHT DOWN AND LEFT"),
    ("└", "BOX DRAWINGS LIGHT UP AND RIGHT"),
    ("┘", "BOX DRAWINGS LIGHT UP AND LEFT"),
    ("├", "BOX DRAWINGS LIGHT VERTICAL AND RIGHT"),
    ("┤", "BOX DRAWINGS LIGHT VERTICAL AND LEFT"),
    ("┼", "BOX DRAWINGS LIGHT VERTICAL AND HORIZONTAL"),
    ("═", "BOX DRAWINGS DOUBLE HORIZONTAL"),
    ("║", "BOX DRAWINGS DOUBLE VERTICAL"),
    ("░", "LIGHT SHADE"),
    ("▒", "MEDIUM SHADE"),
    ("▓", "DARK SHADE"),
    ("█", "FULL BLOCK"),
    ("ﬁ", "LATIN SMALL LIGATURE FI"),
    ("ﬂ", "LATIN SMALL LIGATURE FL"),
];
