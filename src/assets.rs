//! Sprite sheets as plain text blocks.
//!
//! Every block is normalised once at load time into a `Frame` that knows
//! its own extent, so the rest of the game never measures strings.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub height: usize,
    /// Length of the longest line; shorter lines count as space-padded.
    pub width: usize,
}

impl Frame {
    /// Drop blank lines around the block and measure it.  Indentation and
    /// blank lines inside the block are kept.
    pub fn new(raw: &str) -> Self {
        let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let lines = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => &lines[..0],
        };

        Self {
            text: lines.join("\n"),
            height: lines.len(),
            width: lines.iter().map(|l| l.chars().count()).max().unwrap_or(0),
        }
    }
}

/// Every sprite the game draws.
#[derive(Clone, Debug)]
pub struct Assets {
    pub ship: Vec<Frame>,
    pub garbage: Vec<Frame>,
    pub explosion: Vec<Frame>,
    pub game_over: Frame,
}

impl Assets {
    pub fn new(ship: &[&str], garbage: &[&str], explosion: &[&str], game_over: &str) -> Self {
        let load = |raw: &[&str]| -> Vec<Frame> { raw.iter().map(|text| Frame::new(text)).collect() };
        Self {
            ship: load(ship),
            garbage: load(garbage),
            explosion: load(explosion),
            game_over: Frame::new(game_over),
        }
    }

    pub fn builtin() -> Self {
        Self::new(&SHIP, &GARBAGE, &EXPLOSION, GAME_OVER)
    }

    /// Largest ship extent over all animation frames.
    pub fn ship_extent(&self) -> (usize, usize) {
        self.ship.iter().fold((0, 0), |(rows, columns), frame| {
            (rows.max(frame.height), columns.max(frame.width))
        })
    }
}

// ── Builtin art ───────────────────────────────────────────────────────────────

const SHIP: [&str; 2] = [
    r"
  .
 .'.
 |o|
.'o'.
|.-.|
'   '
 ( )
  )
 ( )
",
    r"
  .
 .'.
 |o|
.'o'.
|.-.|
'   '
  )
 ( )
  (
",
];

const GARBAGE: [&str; 6] = [
    r"
   _
,_(')<
\___)
",
    r"
    \  \  \  \
      \  \  \  \
   _____\__\__\__\__
  / \     HUBBLE    \
 | O |_______________)
  \_/_______\  \  \  \
             \  \  \  \
              \__\__\__\
",
    r"
 _
(~)
 #
",
    r"
     ____
  __/    \
 /        \
/         _\
\     ___/
 \___/
",
    r"
     ___
   _/ o \
  /     /
  \____/
",
    r"
          ___
     ____/   \___
  __/           /
 /             |
|             __\
\       _____/
 \_____/
",
];

const EXPLOSION: [&str; 4] = [
    r"
     (_)
 (  (   (  (
() (  (  )
  ( )  ()
",
    r"
     (_)
 (  (   (
   (  (  )
    )  (
",
    r"
      (
    (   (
   (     (
    )  (
",
    r"
      (
        (
      (
",
];

const GAME_OVER: &str = r"
   _____                         ____
  / ____|                       / __ \
 | |  __  __ _ _ __ ___   ___  | |  | |_   _____ _ __
 | | |_ |/ _` | '_ ` _ \ / _ \ | |  | \ \ / / _ \ '__|
 | |__| | (_| | | | | | |  __/ | |__| |\ V /  __/ |
  \_____|\__,_|_| |_| |_|\___|  \____/  \_/ \___|_|
";
