use super::model::{Playlist, Track};

/// The compiled-in playlist the player ships with.
pub fn builtin() -> Playlist {
    let tracks = vec![
        Track::new("Tum Hi Ho", "Arijit Singh", "4:22", "tumhiho.mp3"),
        Track::new("Kesariya", "Arijit Singh", "4:28", "kesariya.mp3"),
        Track::new("Tu Hai ke nahi", "Ankit Tiwari", "5:34", "tu.mp3"),
        Track::new("Tum ho", "Mohit Chauhan", "5:18", "tum.mp3"),
    ];
    // Non-empty literal; construction cannot fail.
    Playlist { tracks }
}
