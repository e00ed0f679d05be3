//! Models relating to calls on the video surface.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::internal::prelude::*;
use crate::model::timestamp::Timestamp;
use crate::model::user::User;

/// A call, as embedded in `call.*` event payloads.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallResponse {
    /// Whether the call is in backstage mode, visible to hosts only.
    pub backstage: bool,
    pub blocked_user_ids: Vec<String>,
    /// The composite `{type}:{id}` identifier of the call.
    pub cid: String,
    pub created_at: Timestamp,
    pub created_by: User,
    pub current_session_id: String,
    /// Application-defined extra data attached to the call.
    pub custom: JsonMap,
    pub egress: Egress,
    pub id: String,
    pub ingress: CallIngress,
    pub recording: bool,
    pub settings: CallSettings,
    pub transcribing: bool,
    /// The call type, e.g. `default` or `livestream`.
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<CallSession>,
    /// When a scheduled call is meant to begin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

/// The egress state of a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Egress {
    pub broadcasting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls: Option<EgressHls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtmps: Option<Vec<EgressRtmp>>,
}

/// The HLS egress of a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EgressHls {
    pub playlist_url: Url,
}

/// One RTMP egress destination of a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EgressRtmp {
    pub name: String,
    pub url: Url,
}

/// The ingress endpoints of a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallIngress {
    pub rtmp: RtmpIngress,
}

/// The RTMP ingress endpoint of a call.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RtmpIngress {
    pub address: String,
}

/// The resolved settings of a call.
///
/// Which sub-objects the server includes depends on the call type's
/// configuration; each is independent of the others.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CallSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backstage: Option<BackstageSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcasting: Option<BroadcastSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geofencing: Option<GeofenceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording: Option<RecordSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<RingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screensharing: Option<ScreensharingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<TranscriptionSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoSettings>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AudioSettings {
    pub access_request_enabled: bool,
    pub default_device: String,
    pub mic_default_on: bool,
    pub opus_dtx_enabled: bool,
    pub redundant_coding_enabled: bool,
    pub speaker_default_on: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BackstageSettings {
    pub enabled: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BroadcastSettings {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls: Option<HlsSettings>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct HlsSettings {
    pub auto_on: bool,
    pub enabled: bool,
    pub quality_tracks: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GeofenceSettings {
    pub names: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RecordSettings {
    pub audio_only: bool,
    /// The recording mode, e.g. `available` or `auto-on`.
    pub mode: String,
    pub quality: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RingSettings {
    pub auto_cancel_timeout_ms: u64,
    pub incoming_call_timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ScreensharingSettings {
    pub access_request_enabled: bool,
    pub enabled: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TranscriptionSettings {
    pub closed_caption_mode: String,
    /// The transcription mode, e.g. `available` or `disabled`.
    pub mode: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct VideoSettings {
    pub access_request_enabled: bool,
    pub camera_default_on: bool,
    /// The preferred camera, `front` or `back`.
    pub camera_facing: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_resolution: Option<TargetResolution>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TargetResolution {
    pub bitrate: u64,
    pub height: u32,
    pub width: u32,
}

/// One ongoing or finished session of a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallSession {
    pub id: String,
    pub participants: Vec<CallParticipant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_ended_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_started_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
}

/// A user's live participation in one call session.
///
/// A user joining from two devices appears as two participants with distinct
/// session identifiers.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallParticipant {
    pub joined_at: Timestamp,
    pub role: String,
    pub user: User,
    pub user_session_id: String,
}

/// A user's membership of one call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallMember {
    pub created_at: Timestamp,
    /// Application-defined extra data attached to the membership.
    pub custom: JsonMap,
    pub updated_at: Timestamp,
    pub user: User,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A reaction sent into a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallReaction {
    /// The reaction type, e.g. `raised-hand`.
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_code: Option<String>,
}

/// A finished call recording ready for download.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallRecording {
    pub end_time: Timestamp,
    pub filename: String,
    pub start_time: Timestamp,
    pub url: Url,
}
