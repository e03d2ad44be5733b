//! Emoji offered by the "Emoji" catalog entry, in display order.
//!
//! Presentation sequences (base character plus U+FE0F) are listed alongside the
//! single code point emoji. They are part of the table but never surfaced in a
//! catalog, which only exposes single code point keys.

pub const EMOJI: &[(&str, &str)] = &[
    // Faces
    ("😀", "GRINNING FACE"),
    ("😃", "SMILING FACE WITH OPEN MOUTH"),
    ("😄", "SMILING FACE WITH OPEN MOUTH AND SMILING EYES"),
    ("😁", "GRINNING FACE WITH SMILING EYES"),
    ("😆", "SMILING FACE WITH OPEN MOUTH AND TIGHTLY-CLOSED EYES"),
    ("😅", "SMILING FACE WITH OPEN MOUTH AND COLD SWEAT"),
    ("😂", "FACE WITH TEARS OF JOY"),
    ("🙂", "SLIGHTLY SMILING FACE"),
    ("🙃", "UPSIDE-DOWN FACE"),
    ("😉", "WINKING FACE"),
    ("😊", "SMILING FACE WITH SMILING EYES"),
    ("😍", "SMILING FACE WITH HEART-SHAPED EYES"),
    ("😘", "FACE THROWING A KISS"),
    ("😎", "SMILING FACE WITH SUNGLASSES"),
    ("🤔", "THINKING FACE"),
    ("😐", "NEUTRAL FACE"),
    ("😑", "EXPRESSIONLESS FACE"),
    ("😏", "SMIRKING FACE"),
    ("😒", "UNAMUSED FACE"),
    ("🙄", "FACE WITH ROLLING EYES"),
    ("😬", "GRIMACING FACE"),
    ("😌", "RELIEVED FACE"),
    ("😴", "SLEEPING FACE"),
    ("😷", "FACE WITH MEDICAL MASK"),
    ("🤯", "SHOCKED FACE WITH EXPLODING HEAD"),
    ("😕", "CONFUSED FACE"),
    ("😢", "CRYING FACE"),
    ("😭", "LOUDLY CRYING FACE"),
    ("😱", "FACE SCREAMING IN FEAR"),
    ("😡", "POUTING FACE"),
    ("🤖", "ROBOT FACE"),
    ("👻", "GHOST"),
    ("💀", "SKULL"),
    // Hands and people
    ("👍", "THUMBS UP SIGN"),
    ("👎", "THUMBS DOWN SIGN"),
    ("👌", "OK HAND SIGN"),
    ("👏", "CLAPPING HANDS SIGN"),
    ("🙌", "PERSON RAISING BOTH HANDS IN CELEBRATION"),
    ("🙏", "PERSON WITH FOLDED HANDS"),
    ("👋", "WAVING HAND SIGN"),
    ("💪", "FLEXED BICEPS"),
    ("👀", "EYES"),
    ("✌️", "VICTORY HAND"),
    ("☝️", "WHITE UP POINTING INDEX"),
    // Hearts and symbols
    ("💔", "BROKEN HEART"),
    ("💯", "HUNDRED POINTS SYMBOL"),
    ("💥", "COLLISION SYMBOL"),
    ("💡", "ELECTRIC LIGHT BULB"),
    ("🔥", "FIRE"),
    ("✨", "SPARKLES"),
    ("🎉", "PARTY POPPER"),
    ("🎁", "WRAPPED PRESENT"),
    ("✅", "WHITE HEAVY CHECK MARK"),
    ("❌", "CROSS MARK"),
    ("❓", "BLACK QUESTION MARK ORNAMENT"),
    ("❗", "HEAVY EXCLAMATION MARK SYMBOL"),
    ("❤️", "HEAVY BLACK HEART"),
    ("⚠️", "WARNING SIGN"),
    ("♻️", "BLACK UNIVERSAL RECYCLING SYMBOL"),
    // Nature and weather
    ("🌞", "SUN WITH FACE"),
    ("🌙", "CRESCENT MOON"),
    ("⭐", "WHITE MEDIUM STAR"),
    ("🌈", "RAINBOW"),
    ("🌊", "WATER WAVE"),
    ("🌱", "SEEDLING"),
    ("🌲", "EVERGREEN TREE"),
    ("🌸", "CHERRY BLOSSOM"),
    ("🍀", "FOUR LEAF CLOVER"),
    ("☀️", "BLACK SUN WITH RAYS"),
    ("❄️", "SNOWFLAKE"),
    // Animals
    ("🐶", "DOG FACE"),
    ("🐱", "CAT FACE"),
    ("🦊", "FOX FACE"),
    ("🐻", "BEAR FACE"),
    ("🐼", "PANDA FACE"),
    ("🐸", "FROG FACE"),
    ("🐙", "OCTOPUS"),
    ("🦀", "CRAB"),
    ("🐍", "SNAKE"),
    ("🐢", "TURTLE"),
    ("🦄", "UNICORN FACE"),
    ("🐝", "HONEYBEE"),
    // Food and drink
    ("🍎", "RED APPLE"),
    ("🍌", "BANANA"),
    ("🍕", "SLICE OF PIZZA"),
    ("🍔", "HAMBURGER"),
    ("🍣", "SUSHI"),
    ("🍩", "DOUGHNUT"),
    ("🍺", "BEER MUG"),
    ("🍷", "WINE GLASS"),
    // Objects and activities
    ("💻", "PERSONAL COMPUTER"),
    ("📱", "MOBILE PHONE"),
    ("📎", "PAPERCLIP"),
    ("📌", "PUSHPIN"),
    ("📝", "MEMO"),
    ("📦", "PACKAGE"),
    ("🔒", "LOCK"),
    ("🔑", "KEY"),
    ("🔧", "WRENCH"),
    ("🔍", "LEFT-POINTING MAGNIFYING GLASS"),
    ("🚀", "ROCKET"),
    ("🚗", "AUTOMOBILE"),
    ("⚽", "SOCCER BALL"),
    ("🎵", "MUSICAL NOTE"),
    ("⏰", "ALARM CLOCK"),
    ("✏️", "PENCIL"),
    ("✉️", "ENVELOPE"),
];
