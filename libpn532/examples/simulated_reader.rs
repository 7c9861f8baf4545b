// Simulated PN532 reader session.
//
// Runs the full driver stack against a scripted MockLink: synchronise,
// query the firmware, configure the SAM, list a MIFARE Classic card,
// authenticate and read block 4. On real hardware, swap MockLink for a
// BitLink over your board's GPIO pins and FakeDelay for its delay source.
//
//     RUST_LOG=trace cargo run --example simulated_reader

use libpn532::prelude::*;
use libpn532::test_support::reply_frame;
use libpn532::transport::{FakeDelay, MockLink};

fn script(link: &MockLink, echo: u8, data: &[u8]) -> anyhow::Result<()> {
    link.push_ack();
    link.push_reply(reply_frame(echo, data)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let link = MockLink::new();
    // begin() sync command: ack only
    link.push_ack();
    script(&link, 0x03, &[0x32, 0x01, 0x06, 0x07])?;
    script(&link, 0x15, &[])?;
    script(
        &link,
        0x4B,
        &[0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0xDE, 0xAD, 0xBE, 0xEF],
    )?;
    script(&link, 0x41, &[0x00])?;
    let mut block = vec![0x00];
    block.extend_from_slice(b"hello, pn532!\0\0\0");
    script(&link, 0x41, &block)?;

    let mut dev = DeviceBuilder::new(link, FakeDelay::new()).build()?;

    let fw = dev.firmware_version()?;
    println!(
        "Found chip PN5{:02x}, firmware {}.{}",
        fw.ic(),
        fw.version(),
        fw.revision()
    );

    dev.sam_config()?;

    println!("Waiting for an ISO14443A card...");
    let target = dev.read_passive_target(BaudRate::Iso14443a106)?;
    println!("  UID: {} (id {})", Hex(target.uid().as_bytes()), target.id());
    println!(
        "  SENS_RES: {:#06x}  SEL_RES: {:#04x}",
        target.sens_res(),
        target.sel_res()
    );

    target.authenticate(&mut dev, 4, KeyType::A, &MifareKey::DEFAULT)?;
    let data = target.read_block(&mut dev, 4)?;
    println!("  Block 4: {}", data.to_hex());

    Ok(())
}
