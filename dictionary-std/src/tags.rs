//! Data element tag declarations
//!
//! This module contains a constant for each attribute known to
//! the standard dictionary, and the table of entries it is built from.

use dcmframes_core::dictionary::{DataDictionaryEntryRef as E, TagRange::*};
use dcmframes_core::header::Tag;
use dcmframes_core::header::VR::*;

/// FileMetaInformationGroupLength (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// PrivateInformationCreatorUID (0002,0100) UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA 1
#[rustfmt::skip]
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// ContentTime (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH 1
#[rustfmt::skip]
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN 1
#[rustfmt::skip]
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StudyDescription (0008,1030) LO 1
#[rustfmt::skip]
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO 1
#[rustfmt::skip]
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// OperatorsName (0008,1070) PN 1-n
#[rustfmt::skip]
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName (0008,1090) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedImageSequence (0008,1140) SQ 1
#[rustfmt::skip]
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// SourceImageSequence (0008,2112) SQ 1
#[rustfmt::skip]
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// DerivationCodeSequence (0008,9215) SQ 1
#[rustfmt::skip]
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// PatientName (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientAge (0010,1010) AS 1
#[rustfmt::skip]
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS 1
#[rustfmt::skip]
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS 1
#[rustfmt::skip]
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// BodyPartExamined (0018,0015) CS 1
#[rustfmt::skip]
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// SliceThickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SoftwareVersions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ImagerPixelSpacing (0018,1164) DS 2
#[rustfmt::skip]
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// PatientPosition (0018,5100) CS 1
#[rustfmt::skip]
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// StudyInstanceUID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// InstanceNumber (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// SliceLocation (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// SamplesPerPixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US 1
#[rustfmt::skip]
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT 1-n
#[rustfmt::skip]
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034) IS 2
#[rustfmt::skip]
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US 1
#[rustfmt::skip]
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US 1
#[rustfmt::skip]
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// WindowCenter (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// LossyImageCompression (0028,2110) CS 1
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS 1-n
#[rustfmt::skip]
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// VOILUTSequence (0028,3010) SQ 1
#[rustfmt::skip]
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// PerformedProtocolCodeSequence (0040,0260) SQ 1
#[rustfmt::skip]
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// ContentSequence (0040,A730) SQ 1
#[rustfmt::skip]
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// SharedFunctionalGroupsSequence (5200,9229) SQ 1
#[rustfmt::skip]
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ 1
#[rustfmt::skip]
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// OverlayRows (60xx,0010) US 1
#[rustfmt::skip]
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (60xx,0011) US 1
#[rustfmt::skip]
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayType (60xx,0040) CS 1
#[rustfmt::skip]
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlayOrigin (60xx,0050) SS 2
#[rustfmt::skip]
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// OverlayBitsAllocated (60xx,0100) US 1
#[rustfmt::skip]
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (60xx,0102) US 1
#[rustfmt::skip]
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayData (60xx,3000) OW 1
#[rustfmt::skip]
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// ExtendedOffsetTable (7FE0,0001) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV 1
#[rustfmt::skip]
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// FloatPixelData (7FE0,0008) OF 1
#[rustfmt::skip]
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD 1
#[rustfmt::skip]
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ 1
#[rustfmt::skip]
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB 1
#[rustfmt::skip]
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item (FFFE,E000) UN 1
#[rustfmt::skip]
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) UN 1
#[rustfmt::skip]
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) UN 1
#[rustfmt::skip]
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

#[rustfmt::skip]
pub(crate) const ENTRIES: &[E<'static>] = &[
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: UL }, // 1
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: OB }, // 1
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: UI }, // 1
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: UI }, // 1
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: UI }, // 1
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: UI }, // 1
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: SH }, // 1
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: AE }, // 1
    E { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: UI }, // 1
    E { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", vr: OB }, // 1
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: CS }, // 1-n
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: CS }, // 2-n
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: DA }, // 1
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: TM }, // 1
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: UI }, // 1
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: UI }, // 1
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: DA }, // 1
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: DA }, // 1
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: DA }, // 1
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: DA }, // 1
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: DT }, // 1
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: TM }, // 1
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: TM }, // 1
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: TM }, // 1
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: SH }, // 1
    E { tag: Single(MODALITY), alias: "Modality", vr: CS }, // 1
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: LO }, // 1
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: LO }, // 1
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: PN }, // 1
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: SH }, // 1
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: SH }, // 1
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: LO }, // 1
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: LO }, // 1
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: LO }, // 1
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: PN }, // 1-n
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: LO }, // 1
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: SQ }, // 1
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: UI }, // 1
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: UI }, // 1
    E { tag: Single(SOURCE_IMAGE_SEQUENCE), alias: "SourceImageSequence", vr: SQ }, // 1
    E { tag: Single(DERIVATION_CODE_SEQUENCE), alias: "DerivationCodeSequence", vr: SQ }, // 1
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: PN }, // 1
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: LO }, // 1
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: DA }, // 1
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: CS }, // 1
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: AS }, // 1
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: DS }, // 1
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: DS }, // 1
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: CS }, // 1
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: DS }, // 1
    E { tag: Single(KVP), alias: "KVP", vr: DS }, // 1
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: LO }, // 1-n
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: LO }, // 1
    E { tag: Single(IMAGER_PIXEL_SPACING), alias: "ImagerPixelSpacing", vr: DS }, // 2
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: CS }, // 1
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: UI }, // 1
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: UI }, // 1
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: SH }, // 1
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: IS }, // 1
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: IS }, // 1
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: CS }, // 2
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: DS }, // 3
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: DS }, // 6
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: UI }, // 1
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: DS }, // 1
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: US }, // 1
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: CS }, // 1
    E { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: US }, // 1
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: IS }, // 1
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: AT }, // 1-n
    E { tag: Single(ROWS), alias: "Rows", vr: US }, // 1
    E { tag: Single(COLUMNS), alias: "Columns", vr: US }, // 1
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: DS }, // 2
    E { tag: Single(PIXEL_ASPECT_RATIO), alias: "PixelAspectRatio", vr: IS }, // 2
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: US }, // 1
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: US }, // 1
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: US }, // 1
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: US }, // 1
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: US }, // 1
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: US }, // 1
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: DS }, // 1-n
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: DS }, // 1-n
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: DS }, // 1
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: DS }, // 1
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: LO }, // 1
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: CS }, // 1
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: DS }, // 1-n
    E { tag: Single(VOILUT_SEQUENCE), alias: "VOILUTSequence", vr: SQ }, // 1
    E { tag: Single(PERFORMED_PROTOCOL_CODE_SEQUENCE), alias: "PerformedProtocolCodeSequence", vr: SQ }, // 1
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: SQ }, // 1
    E { tag: Single(SHARED_FUNCTIONAL_GROUPS_SEQUENCE), alias: "SharedFunctionalGroupsSequence", vr: SQ }, // 1
    E { tag: Single(PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), alias: "PerFrameFunctionalGroupsSequence", vr: SQ }, // 1
    E { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: US }, // 1
    E { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: US }, // 1
    E { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: CS }, // 1
    E { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: SS }, // 2
    E { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: US }, // 1
    E { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: US }, // 1
    E { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: OW }, // 1
    E { tag: Single(EXTENDED_OFFSET_TABLE), alias: "ExtendedOffsetTable", vr: OV }, // 1
    E { tag: Single(EXTENDED_OFFSET_TABLE_LENGTHS), alias: "ExtendedOffsetTableLengths", vr: OV }, // 1
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: OF }, // 1
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: OD }, // 1
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: OW }, // 1
    E { tag: Single(DIGITAL_SIGNATURES_SEQUENCE), alias: "DigitalSignaturesSequence", vr: SQ }, // 1
    E { tag: Single(DATA_SET_TRAILING_PADDING), alias: "DataSetTrailingPadding", vr: OB }, // 1
    E { tag: Single(ITEM), alias: "Item", vr: UN }, // 1
    E { tag: Single(ITEM_DELIMITATION_ITEM), alias: "ItemDelimitationItem", vr: UN }, // 1
    E { tag: Single(SEQUENCE_DELIMITATION_ITEM), alias: "SequenceDelimitationItem", vr: UN }, // 1
];
