//! Tag lookup over the standard attribute table.

use crate::tags::ENTRIES;
use dcmframes_core::dictionary::{DataDictionary, DataDictionaryEntryRef, TagRange::*};
use dcmframes_core::header::Tag;
use dcmframes_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Entry = DataDictionaryEntryRef<'static>;

/// Table entries by their tag, open components zeroed.
static BY_TAG: Lazy<HashMap<Tag, &'static Entry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.tag.inner(), entry)).collect());

/// Attributes defined for whole tag ranges rather than a table row.
static GENERIC_ENTRIES: [Entry; 2] = [
    DataDictionaryEntryRef {
        tag: PrivateCreator,
        alias: "PrivateCreator",
        vr: VR::LO,
    },
    DataDictionaryEntryRef {
        tag: GroupLength,
        alias: "GenericGroupLength",
        vr: VR::UL,
    },
];

/// The standard DICOM attribute dictionary,
/// consulted by tag when decoding implicit VR content.
///
/// Repeating groups such as _Overlay Data_ (60xx,3000),
/// private creators and group lengths are resolved as well.
/// The index is built upon first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    type Entry = Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Entry> {
        let keys = [tag, Tag(tag.0 & 0xFF00, tag.1), Tag(tag.0, tag.1 & 0xFF00)];
        keys.iter()
            .filter_map(|key| BY_TAG.get(key))
            .find(|entry| entry.tag.contains(tag))
            .copied()
            .or_else(|| GENERIC_ENTRIES.iter().find(|entry| entry.tag.contains(tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use crate::tags::*;
    use dcmframes_core::dictionary::{DataDictionary, DataDictionaryEntry, TagRange::*};
    use dcmframes_core::header::{Tag, VR};

    fn vr_of(tag: Tag) -> Option<VR> {
        StandardDataDictionary.by_tag(tag).map(|entry| entry.vr())
    }

    #[test]
    fn resolves_table_entries() {
        let rows = StandardDataDictionary.by_tag(ROWS).unwrap();
        assert_eq!(rows.alias(), "Rows");
        assert_eq!(rows.vr(), VR::US);
        assert_eq!(vr_of(PATIENT_NAME), Some(VR::PN));
        assert_eq!(vr_of(PIXEL_DATA), Some(VR::OW));
        assert_eq!(vr_of(TRANSFER_SYNTAX_UID), Some(VR::UI));
        assert_eq!(vr_of(Tag(0x0029, 0x1010)), None);
        assert_eq!(vr_of(Tag(0x0028, 0x9999)), None);
    }

    #[test]
    fn resolves_repeating_groups() {
        let overlay = StandardDataDictionary.by_tag(Tag(0x60EE, 0x3000)).unwrap();
        assert_eq!(overlay.tag_range(), Group100(Tag(0x6000, 0x3000)));
        assert_eq!(overlay.vr(), VR::OW);
        // only the open digits may vary
        assert_eq!(vr_of(Tag(0x61EE, 0x3000)), None);
    }

    #[test]
    fn resolves_group_lengths() {
        let meta_length = StandardDataDictionary
            .by_tag(FILE_META_INFORMATION_GROUP_LENGTH)
            .unwrap();
        assert_eq!(meta_length.alias(), "FileMetaInformationGroupLength");

        let generic = StandardDataDictionary.by_tag(Tag(0x7FE0, 0x0000)).unwrap();
        assert_eq!(generic.tag_range(), GroupLength);
        assert_eq!(generic.vr(), VR::UL);
    }

    #[test]
    fn resolves_private_creators() {
        for tag in [
            Tag(0x0009, 0x0010),
            Tag(0x0009, 0x0011),
            Tag(0x000B, 0x0010),
            Tag(0x00ED, 0x00FF),
        ] {
            let entry = StandardDataDictionary.by_tag(tag).unwrap();
            assert_eq!(entry.tag_range(), PrivateCreator);
            assert_eq!(entry.vr(), VR::LO);
        }
        assert_eq!(vr_of(Tag(0x0009, 0x0100)), None);
    }

    #[test]
    fn constants_available() {
        assert_eq!(PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(NUMBER_OF_FRAMES, Tag(0x0028, 0x0008));
        assert_eq!(SEQUENCE_DELIMITATION_ITEM, Tag::SEQUENCE_DELIMITER);
    }
}
