//! Static chapter registry: chapter number to canonical transliterated name.

/// Number of chapters in the Quran.
pub const CHAPTER_COUNT: u16 = 114;

/// Canonical transliterated names, indexed by chapter number minus one.
const CHAPTER_NAMES: [&str; CHAPTER_COUNT as usize] = [
    "Al-Fatihah",
    "Al-Baqarah",
    "Ali 'Imran",
    "An-Nisa",
    "Al-Ma'idah",
    "Al-An'am",
    "Al-A'raf",
    "Al-Anfal",
    "At-Tawbah",
    "Yunus",
    "Hud",
    "Yusuf",
    "Ar-Ra'd",
    "Ibrahim",
    "Al-Hijr",
    "An-Nahl",
    "Al-Isra",
    "Al-Kahf",
    "Maryam",
    "Taha",
    "Al-Anbya",
    "Al-Hajj",
    "Al-Mu'minun",
    "An-Nur",
    "Al-Furqan",
    "Ash-Shu'ara",
    "An-Naml",
    "Al-Qasas",
    "Al-'Ankabut",
    "Ar-Rum",
    "Luqman",
    "As-Sajdah",
    "Al-Ahzab",
    "Saba",
    "Fatir",
    "Ya-Sin",
    "As-Saffat",
    "Sad",
    "Az-Zumar",
    "Ghafir",
    "Fussilat",
    "Ash-Shuraa",
    "Az-Zukhruf",
    "Ad-Dukhan",
    "Al-Jathiyah",
    "Al-Ahqaf",
    "Muhammad",
    "Al-Fath",
    "Al-Hujurat",
    "Qaf",
    "Adh-Dhariyat",
    "At-Tur",
    "An-Najm",
    "Al-Qamar",
    "Ar-Rahman",
    "Al-Waqi'ah",
    "Al-Hadid",
    "Al-Mujadila",
    "Al-Hashr",
    "Al-Mumtahanah",
    "As-Saf",
    "Al-Jumu'ah",
    "Al-Munafiqun",
    "At-Taghabun",
    "At-Talaq",
    "At-Tahrim",
    "Al-Mulk",
    "Al-Qalam",
    "Al-Haqqah",
    "Al-Ma'arij",
    "Nuh",
    "Al-Jinn",
    "Al-Muzzammil",
    "Al-Muddaththir",
    "Al-Qiyamah",
    "Al-Insan",
    "Al-Mursalat",
    "An-Naba",
    "An-Nazi'at",
    "'Abasa",
    "At-Takwir",
    "Al-Infitar",
    "Al-Mutaffifin",
    "Al-Inshiqaq",
    "Al-Buruj",
    "At-Tariq",
    "Al-A'la",
    "Al-Ghashiyah",
    "Al-Fajr",
    "Al-Balad",
    "Ash-Shams",
    "Al-Layl",
    "Ad-Duhaa",
    "Ash-Sharh",
    "At-Tin",
    "Al-'Alaq",
    "Al-Qadr",
    "Al-Bayyinah",
    "Az-Zalzalah",
    "Al-'Adiyat",
    "Al-Qari'ah",
    "At-Takathur",
    "Al-'Asr",
    "Al-Humazah",
    "Al-Fil",
    "Quraysh",
    "Al-Ma'un",
    "Al-Kawthar",
    "Al-Kafirun",
    "An-Nasr",
    "Al-Masad",
    "Al-Ikhlas",
    "Al-Falaq",
    "An-Nas",
];

/// Canonical transliterated name for a chapter number.
///
/// Out-of-range numbers yield a `"Surah {n}"` fallback label instead of
/// failing; this lookup is a display-only convenience and never errors.
pub fn chapter_name(chapter: u16) -> String {
    match chapter {
        1..=CHAPTER_COUNT => CHAPTER_NAMES[usize::from(chapter) - 1].to_string(),
        _ => format!("Surah {chapter}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_names_resolve() {
        assert_eq!(chapter_name(1), "Al-Fatihah");
        assert_eq!(chapter_name(2), "Al-Baqarah");
        assert_eq!(chapter_name(57), "Al-Hadid");
        assert_eq!(chapter_name(114), "An-Nas");
    }

    #[test]
    fn out_of_range_falls_back() {
        assert_eq!(chapter_name(0), "Surah 0");
        assert_eq!(chapter_name(200), "Surah 200");
    }

    #[test]
    fn table_has_no_blank_entries() {
        for name in CHAPTER_NAMES {
            assert!(!name.trim().is_empty());
        }
    }
}
