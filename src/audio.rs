use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source, source::Buffered};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const FIRE_SOUND_PATH: &str = "assets/sounds/fire.wav";

const FIRE_VOLUME: f32 = 0.01;
// The kill cue reuses the fire sample at a lower volume.
const KILL_VOLUME: f32 = 0.005;

type Sample = Buffered<Decoder<BufReader<File>>>;

/// Plays short cues for the frame events reported by the update pass.
/// Construction never fails: a machine without an audio device, or a missing
/// sample file, yields a silent manager.
pub struct AudioManager {
    output: Option<Output>,
}

struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    fire_sample: Option<Sample>,
}

impl AudioManager {
    pub fn new() -> Self {
        let Ok((stream, handle)) = OutputStream::try_default() else {
            return Self { output: None };
        };
        Self {
            output: Some(Output {
                _stream: stream,
                handle,
                fire_sample: load_sample(FIRE_SOUND_PATH),
            }),
        }
    }

    /// Cue for a projectile leaving the ship.
    pub fn play_fire(&self) {
        self.play(FIRE_VOLUME);
    }

    /// Cue for a destroyed enemy.
    pub fn play_kill(&self) {
        self.play(KILL_VOLUME);
    }

    fn play(&self, volume: f32) {
        let Some(output) = &self.output else { return };
        let Some(sample) = &output.fire_sample else {
            return;
        };
        // Playback failure never interrupts the frame loop.
        if let Ok(sink) = Sink::try_new(&output.handle) {
            sink.set_volume(volume);
            sink.append(sample.clone());
            sink.detach();
        }
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

fn load_sample(path: impl AsRef<Path>) -> Option<Sample> {
    let file = File::open(path).ok()?;
    let decoder = Decoder::new(BufReader::new(file)).ok()?;
    Some(decoder.buffered())
}
