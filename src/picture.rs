//! ASCII-art die faces in two fixed sizes, rendered with a left margin so
//! the pictures sit roughly centered under the header box.

const DIE_TAB: &str = "              ";

pub const FACE_RANGE_ERROR: &str = "ERROR: roll number outside D6 range!";
pub const PICTURE_SIZE_ERROR: &str = "ERROR: getDiePicture() only accepts size 5 or size 7!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureSize {
    Small,
    Large,
}

impl PictureSize {
    /// Only 5 and 7 are drawable; every other value is rejected so the
    /// caller can show the size error instead of silently substituting.
    pub fn from_px(px: i64) -> Option<Self> {
        match px {
            5 => Some(Self::Small),
            7 => Some(Self::Large),
            _ => None,
        }
    }
}

const FACES_5X5: [[&str; 4]; 6] = [
    [" _____ ", "|     |", "|  O  |", "|_____|"],
    [" _____ ", "|    O|", "|     |", "|O____|"],
    [" _____ ", "|    O|", "|  O  |", "|O____|"],
    [" _____ ", "|O   O|", "|     |", "|O___O|"],
    [" _____ ", "|O   O|", "|  O  |", "|O___O|"],
    [" _____ ", "|O   O|", "|O   O|", "|O___O|"],
];

const FACES_7X7: [[&str; 6]; 6] = [
    [
        " _______ ",
        "|       |",
        "|       |",
        "|   O   |",
        "|       |",
        "|_______|",
    ],
    [
        " _______ ",
        "|       |",
        "|     O |",
        "|       |",
        "| O     |",
        "|_______|",
    ],
    [
        " _______ ",
        "|       |",
        "|     O |",
        "|   O   |",
        "| O     |",
        "|_______|",
    ],
    [
        " _______ ",
        "|       |",
        "| O   O |",
        "|       |",
        "| O   O |",
        "|_______|",
    ],
    [
        " _______ ",
        "|       |",
        "| O   O |",
        "|   O   |",
        "| O   O |",
        "|_______|",
    ],
    [
        " _______ ",
        "|       |",
        "| O   O |",
        "| O   O |",
        "| O   O |",
        "|_______|",
    ],
];

/// Picture for one rolled face, or a sentinel error string. Bad input never
/// stops the game; the caller prints whatever comes back.
pub fn die_picture(face: u8, size_px: i64) -> String {
    let Some(size) = PictureSize::from_px(size_px) else {
        return PICTURE_SIZE_ERROR.to_string();
    };
    if !(1..=6).contains(&face) {
        return FACE_RANGE_ERROR.to_string();
    }

    let rows: &[&str] = match size {
        PictureSize::Small => &FACES_5X5[(face - 1) as usize],
        PictureSize::Large => &FACES_7X7[(face - 1) as usize],
    };
    let mut picture = String::new();
    for row in rows {
        picture.push_str(DIE_TAB);
        picture.push_str(row);
        picture.push('\n');
    }
    picture
}
