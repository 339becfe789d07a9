use glam::Vec3;

// ---------------------------------------------------------------------------
// Clip definitions
// ---------------------------------------------------------------------------

/// Index into the ClipStore resource.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClipHandle(pub usize);

/// Immutable definition of one sprite sequence.
pub struct FlipbookClip {
    /// Short name used in playback logs.
    pub name: &'static str,
    /// Frames in the sequence. Must be at least 1 for anything to show.
    pub frame_count: usize,
    /// Playback rate in frames per second.
    pub fps: f32,
    /// Base color the placeholder renderer draws this clip with.
    pub tint: Vec3,
}

/// Owns every clip definition in the scene. Filled during scene setup,
/// read-only afterwards; systems resolve [`ClipHandle`]s against it.
pub struct ClipStore {
    clips: Vec<FlipbookClip>,
}

impl ClipStore {
    pub fn new() -> Self {
        Self { clips: Vec::new() }
    }

    pub fn add(&mut self, clip: FlipbookClip) -> ClipHandle {
        let handle = ClipHandle(self.clips.len());
        self.clips.push(clip);
        handle
    }

    pub fn get(&self, handle: ClipHandle) -> &FlipbookClip {
        &self.clips[handle.0]
    }
}

// ---------------------------------------------------------------------------
// Flipbook playback component
// ---------------------------------------------------------------------------

/// Sprite playback state attached to the character entity.
///
/// Bound to one clip at a time. Advances its own frame cursor each frame and
/// either wraps (looping) or parks on the last frame (one-shot). The
/// animation state machine is its only writer; everything else just reads
/// which frame to draw.
pub struct Flipbook {
    clip: ClipHandle,
    looping: bool,
    playing: bool,
    frame: usize,
    timer: f32,
}

impl Flipbook {
    /// Start playing `clip` from frame zero.
    pub fn new(clip: ClipHandle, looping: bool) -> Self {
        Self {
            clip,
            looping,
            playing: true,
            frame: 0,
            timer: 0.0,
        }
    }

    /// The bound clip. The state machine compares this against its table to
    /// decide whether a rebind is needed.
    pub fn clip(&self) -> ClipHandle {
        self.clip
    }

    /// False once a one-shot clip has shown its last frame. Looping clips
    /// never report completion.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Frame cursor into the bound clip.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Bind a different clip. Leaves the cursor alone; callers pair this
    /// with [`Flipbook::play_from_start`].
    pub fn set_clip(&mut self, clip: ClipHandle) {
        self.clip = clip;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Restart playback at frame zero.
    pub fn play_from_start(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
        self.playing = true;
    }

    /// Advance playback by `dt` seconds against the bound clip's definition.
    /// Returns true on the call where a one-shot clip completes.
    pub fn advance(&mut self, clip: &FlipbookClip, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        if clip.frame_count == 0 || clip.fps <= 0.0 {
            // Degenerate clip: nothing to play, complete immediately.
            self.playing = false;
            return true;
        }

        self.timer += dt;
        let frame_duration = 1.0 / clip.fps;
        while self.timer >= frame_duration {
            self.timer -= frame_duration;
            if self.frame + 1 < clip.frame_count {
                self.frame += 1;
            } else if self.looping {
                self.frame = 0;
            } else {
                // Park on the last frame; the state machine reacts to
                // `is_playing() == false` on its next tick.
                self.playing = false;
                return true;
            }
        }
        false
    }
}
