/// Where the interactive surface sits in the select-generate-read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No image selected yet.
    Empty,
    /// An image is on the canvas; a meme can be generated.
    ImageLoaded,
    /// Captions are drawn; the meme can be cleared or read aloud.
    MemeGenerated,
}

/// Which controls are live at the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buttons {
    pub generate: bool,
    pub clear: bool,
    pub read: bool,
}

/// Ephemeral button-enablement state machine. Nothing here is persisted;
/// transitions that correspond to a disabled button are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workflow {
    stage: Stage,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self {
            stage: Stage::Empty,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn buttons(&self) -> Buttons {
        match self.stage {
            Stage::Empty => Buttons {
                generate: false,
                clear: false,
                read: false,
            },
            Stage::ImageLoaded => Buttons {
                generate: true,
                clear: false,
                read: false,
            },
            Stage::MemeGenerated => Buttons {
                generate: false,
                clear: true,
                read: true,
            },
        }
    }

    /// Selecting a new image is always possible and resets any generated meme.
    pub fn image_loaded(&mut self) {
        self.stage = Stage::ImageLoaded;
    }

    /// Generate only fires while its button is enabled.
    pub fn meme_generated(&mut self) -> bool {
        if !self.buttons().generate {
            return false;
        }
        self.stage = Stage::MemeGenerated;
        true
    }

    /// Clear wipes the captions but keeps the image selectable state: the
    /// surface returns to the image-loaded flags.
    pub fn cleared(&mut self) -> bool {
        if !self.buttons().clear {
            return false;
        }
        self.stage = Stage::ImageLoaded;
        true
    }
}
