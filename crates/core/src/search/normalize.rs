use unicode_normalization::UnicodeNormalization;

/// Lower-case `text` and strip combining diacritical marks.
///
/// The text is decomposed (NFD) so that accented letters split into a base
/// letter followed by marks in `U+0300..=U+036F`, which are then dropped.
#[must_use]
pub fn normalize(text: &str) -> String {
	text.to_lowercase()
		.nfd()
		.filter(|ch| !is_combining_mark(*ch))
		.collect()
}

fn is_combining_mark(ch: char) -> bool {
	('\u{0300}'..='\u{036F}').contains(&ch)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn folds_case_and_accents() {
		assert_eq!(normalize("CAFÉ"), normalize("cafe"));
		assert_eq!(normalize("Évaluation"), "evaluation");
		assert_eq!(normalize("Mémorisation Révision"), "memorisation revision");
	}

	#[test]
	fn is_idempotent() {
		for sample in ["Vidéo & Multimédia", "ÀÉÎÕÜ", "plain", ""] {
			let once = normalize(sample);
			assert_eq!(normalize(&once), once);
		}
	}

	#[test]
	fn keeps_non_latin_characters() {
		assert_eq!(normalize("Δelta"), "δelta");
	}
}
