// libpn532/src/device/handle.rs

use std::marker::PhantomData;

use embedded_hal::delay::DelayNs;

use crate::card::Target;
use crate::protocol::commands::DEFAULT_SAM_TIMEOUT;
use crate::protocol::{Command, Response, codec};
use crate::transport::{Link, RawReply, Session};
use crate::types::{
    BaudRate, BlockData, DepBaudRate, FirmwareVersion, KeyType, MifareKey, SamMode, TargetConfig,
    TargetId,
};
use crate::utils::Hex;
use crate::{Error, ErrorKind, Result};

/// Marker for a device that has not been synchronised yet
pub struct Uninitialized;
/// Marker for a device whose link has been synchronised
pub struct Initialized;

/// Target number the PN532 assigns to the first (only) listed target.
const FIRST_TARGET: u8 = 1;

/// Device handle that enforces initialization state at compile time.
pub struct Device<L, D, State = Uninitialized> {
    session: Session<L, D>,
    _state: PhantomData<State>,
}

impl<L: Link, D: DelayNs, State> Device<L, D, State> {
    /// Underlying session.
    pub fn session(&self) -> &Session<L, D> {
        &self.session
    }

    /// Tear down the handle and return the link and delay source.
    pub fn release(self) -> (L, D) {
        self.session.into_parts()
    }
}

impl<L: Link, D: DelayNs> Device<L, D, Uninitialized> {
    /// Wrap a session; call [`Device::begin`] before anything else.
    pub fn new(session: Session<L, D>) -> Self {
        Self {
            session,
            _state: PhantomData,
        }
    }

    /// Synchronise with the chip. A first command after power-up is often
    /// lost, so a firmware-version request is sent and its outcome is
    /// ignored. Only link failures abort.
    pub fn begin(self) -> Result<Device<L, D, Initialized>> {
        let mut this = self;
        let frame = codec::encode_command_frame(&Command::GetFirmwareVersion)?;
        match this.session.send_command(&frame) {
            Ok(()) => log::debug!("link synchronised"),
            Err(e) if e.kind() == ErrorKind::Link => return Err(e),
            Err(e) => log::warn!("ignoring sync failure: {}", e),
        }

        Ok(Device {
            session: this.session,
            _state: PhantomData,
        })
    }
}

impl<L: Link, D: DelayNs> Device<L, D, Initialized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let request = cmd.to_frame()?;
        let reply = self.session.exchange(&request)?;
        codec::decode_response(cmd, &reply)
    }

    /// Query IC, firmware version, revision and supported card families.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(&Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(v) => {
                log::debug!("firmware {}", v);
                Ok(v)
            }
            other => Err(unexpected("firmware version", &other)),
        }
    }

    /// Put the secure access module in normal mode (no SAM), 1 s timeout,
    /// IRQ enabled.
    pub fn sam_config(&mut self) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode: SamMode::Normal,
            timeout: DEFAULT_SAM_TIMEOUT,
            use_irq: true,
        };
        match self.execute(&cmd)? {
            Response::SamConfigured => Ok(()),
            other => Err(unexpected("SAM configuration", &other)),
        }
    }

    /// Poll for exactly one passive target at the given modulation.
    pub fn read_passive_target(&mut self, baud_rate: BaudRate) -> Result<Target> {
        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            baud_rate,
        };
        match self.execute(&cmd)? {
            Response::PassiveTarget(target) => {
                log::debug!(
                    "found target {}: SENS_RES={:#06x} SEL_RES={:#04x} id=[{}]",
                    target.target_number(),
                    target.sens_res(),
                    target.sel_res(),
                    Hex(target.uid().as_bytes())
                );
                Ok(target)
            }
            other => Err(unexpected("passive target", &other)),
        }
    }

    /// Authenticate `block` of the listed target with a MIFARE key.
    pub fn authenticate_block(
        &mut self,
        target: u8,
        key_type: KeyType,
        block: u8,
        key: &MifareKey,
        id: TargetId,
    ) -> Result<()> {
        let cmd = Command::MifareAuthenticate {
            target,
            key_type,
            block,
            key: *key,
            id,
        };
        match self.execute(&cmd)? {
            Response::Authenticated => Ok(()),
            other => Err(unexpected("authentication", &other)),
        }
    }

    /// Read one 16-byte block; authenticate its sector first.
    pub fn read_block(&mut self, target: u8, block: u8) -> Result<BlockData> {
        match self.execute(&Command::MifareRead { target, block })? {
            Response::BlockRead(data) => {
                log::debug!("block {}: {}", block, Hex(data.as_bytes()));
                Ok(data)
            }
            other => Err(unexpected("block read", &other)),
        }
    }

    /// Write one 16-byte block; authenticate its sector first.
    pub fn write_block(&mut self, target: u8, block: u8, data: &BlockData) -> Result<()> {
        let cmd = Command::MifareWrite {
            target,
            block,
            data: *data,
        };
        match self.execute(&cmd)? {
            Response::BlockWritten => Ok(()),
            other => Err(unexpected("block write", &other)),
        }
    }

    /// Become a DEP initiator in active mode.
    pub fn configure_peer_as_initiator(&mut self, baud_rate: DepBaudRate) -> Result<()> {
        let cmd = Command::InJumpForDep {
            active: true,
            baud_rate,
        };
        match self.execute(&cmd)? {
            Response::DepLinked => Ok(()),
            other => Err(unexpected("DEP link", &other)),
        }
    }

    /// Send 16 bytes to the DEP target and return its 16-byte answer.
    pub fn initiator_exchange(&mut self, outgoing: &[u8; 16]) -> Result<[u8; 16]> {
        let cmd = Command::InDataExchange {
            target: FIRST_TARGET,
            data: *outgoing,
        };
        match self.execute(&cmd)? {
            Response::DepData(incoming) => Ok(incoming),
            other => Err(unexpected("DEP data", &other)),
        }
    }

    /// Wait to be activated by an initiator, advertising the default
    /// target parameters.
    pub fn configure_peer_as_target(&mut self) -> Result<()> {
        self.configure_peer_as_target_with(TargetConfig::default())
    }

    /// Like [`Device::configure_peer_as_target`] with explicit parameters.
    pub fn configure_peer_as_target_with(&mut self, config: TargetConfig) -> Result<()> {
        match self.execute(&Command::TgInitAsTarget { config })? {
            Response::TargetActivated => Ok(()),
            other => Err(unexpected("target activation", &other)),
        }
    }

    /// Receive 16 bytes from the initiator, then answer with `outgoing`.
    /// Nothing is sent when the receive leg fails.
    pub fn target_exchange(&mut self, outgoing: &[u8; 16]) -> Result<[u8; 16]> {
        let incoming = match self.execute(&Command::TgGetData)? {
            Response::DepData(incoming) => incoming,
            other => return Err(unexpected("DEP data", &other)),
        };
        match self.execute(&Command::TgSetData { data: *outgoing })? {
            Response::TargetDataSent => Ok(incoming),
            other => Err(unexpected("DEP send", &other)),
        }
    }

    /// Read one internal register.
    pub fn read_register(&mut self, address: u16) -> Result<u8> {
        match self.execute(&Command::ReadRegister { address })? {
            Response::Register(value) => Ok(value),
            other => Err(unexpected("register value", &other)),
        }
    }

    /// Write one register. The write counts as done once the chip has
    /// acknowledged it; the reply frame is drained but not decoded, so only
    /// link failures while draining are reported. Use [`Device::execute`]
    /// with [`Command::WriteRegister`] to have the reply checked as well.
    pub fn write_register(&mut self, address: u16, value: u8) -> Result<()> {
        let request = Command::WriteRegister { address, value }.to_frame()?;
        self.session.send_command(&request.encode())?;
        match self.session.read_frame_bytes() {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::Link => Err(e),
            Err(e) => {
                log::debug!("register {:#06x} written, reply not drained cleanly: {}", address, e);
                Ok(())
            }
        }
    }

    /// Send caller-framed bytes and return the raw acknowledgement and reply.
    pub fn raw_exchange(&mut self, frame: &[u8]) -> Result<RawReply> {
        self.session.raw_exchange(frame)
    }
}

fn unexpected(expected: &str, got: &Response) -> Error {
    Error::FrameFormat(format!("expected {} reply, got {:?}", expected, got))
}
