//! The SD-card-to-SSD migration walkthrough.

use super::rich_text::{Block, Inline, RichText};

use Inline::{Code, Strong, Text};

#[cfg(test)]
#[path = "steps_test.rs"]
mod steps_test;

/// One static unit of guidance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepRecord {
    pub title: &'static str,
    pub description: &'static [Block],
    /// Shell command shown in a terminal block, without the `$ ` prompt.
    pub command: Option<&'static str>,
    pub warning: Option<RichText>,
    pub note: Option<RichText>,
}

/// Ordered migration steps. Never empty.
pub static STEPS: &[StepRecord] = &[
    StepRecord {
        title: "Prerequisites & Introduction",
        description: &[
            Block::Paragraph(&[Text(
                "Welcome! This guide will walk you through cloning your Jetson's operating system from an SD card to an SSD, making it bootable.",
            )]),
            Block::Paragraph(&[Text(
                "This process offers significant performance improvements. Before you begin, ensure you have the following:",
            )]),
            Block::List(&[
                &[Text("Your NVIDIA Jetson device, booted from the SD card.")],
                &[Text("An SSD with enough capacity to hold your current OS.")],
                &[Text("A USB-to-SATA/NVMe adapter or enclosure to connect the SSD.")],
            ]),
        ],
        command: None,
        warning: Some(&[Text(
            "This process carries a risk of data loss if performed incorrectly. Please back up any critical data before proceeding.",
        )]),
        note: None,
    },
    StepRecord {
        title: "Connect SSD and Identify Drives",
        description: &[
            Block::Paragraph(&[Text(
                "First, connect your SSD to the Jetson using your adapter. Once connected, open a terminal and run the following command to list all block storage devices.",
            )]),
            Block::Paragraph(&[
                Text(
                    "This will help you identify the device names for your SD card (the source) and your new SSD (the destination). Your SD card will likely be ",
                ),
                Code("mmcblk0"),
                Text(" and your SSD will be something like "),
                Code("sda"),
                Text(" or "),
                Code("nvme0n1"),
                Text("."),
            ]),
        ],
        command: Some("lsblk -p"),
        warning: None,
        note: Some(&[Text(
            "Look for the device that matches the size of your SSD. Note down the full path (e.g., /dev/sda) for both the source and destination drives. You will need them in the next step.",
        )]),
    },
    StepRecord {
        title: "Clone SD Card to SSD",
        description: &[
            Block::Paragraph(&[
                Text("Now we will perform a block-level copy from the SD card to the SSD using the "),
                Code("dd"),
                Text(" command."),
            ]),
            Block::Paragraph(&[
                Text("Replace "),
                Code("/dev/source_drive"),
                Text(" with your SD card's device path and "),
                Code("/dev/destination_drive"),
                Text(" with your SSD's device path you identified in the previous step."),
            ]),
        ],
        command: Some("sudo dd if=/dev/source_drive of=/dev/destination_drive bs=4M conv=fsync status=progress"),
        warning: Some(&[
            Strong("CRITICAL:"),
            Text(" The "),
            Code("dd"),
            Text(" command is extremely powerful and can wipe your data permanently. "),
            Strong("TRIPLE-CHECK"),
            Text(" that "),
            Code("if="),
            Text(" is your SD card and "),
            Code("of="),
            Text(" is your new, empty SSD. An error here is irreversible."),
        ]),
        note: None,
    },
    StepRecord {
        title: "Identify New Root Partition UUID",
        description: &[
            Block::Paragraph(&[Text(
                "After the clone finishes, the OS on the SSD still references the old SD card's unique identifier (UUID) for booting. We need to update this.",
            )]),
            Block::Paragraph(&[
                Text("First, run "),
                Code("lsblk -p"),
                Text(
                    " again to see the partitions on the new SSD. Find the main Linux root partition (it will be the largest one, e.g., ",
                ),
                Code("/dev/sda1"),
                Text(")."),
            ]),
            Block::Paragraph(&[
                Text("Then, use the "),
                Code("blkid"),
                Text(" command to get the UUID of this new partition. Replace "),
                Code("/dev/your_ssd_partition"),
                Text(" with the correct path."),
            ]),
        ],
        command: Some("sudo blkid /dev/your_ssd_partition"),
        warning: None,
        note: Some(&[
            Text("Copy the UUID value from the output (it's the long string in quotes after "),
            Code("UUID="),
            Text("). You will need it in the next step."),
        ]),
    },
    StepRecord {
        title: "Update the Filesystem Table (fstab)",
        description: &[
            Block::Paragraph(&[
                Text("We need to mount the SSD's root partition to edit its "),
                Code("fstab"),
                Text(" file."),
            ]),
            Block::Paragraph(&[Text("First, create a temporary mount point:")]),
        ],
        command: Some("sudo mkdir /mnt/ssd"),
        warning: None,
        note: None,
    },
    StepRecord {
        title: "Mount and Edit fstab",
        description: &[Block::Paragraph(&[
            Text("Now mount the SSD's root partition to this new directory. Replace "),
            Code("/dev/your_ssd_partition"),
            Text(" accordingly."),
        ])],
        command: Some("sudo mount /dev/your_ssd_partition /mnt/ssd"),
        warning: None,
        note: Some(&[
            Text("Once mounted, open the "),
            Code("fstab"),
            Text(" file on the SSD using a text editor like nano: "),
            Code("sudo nano /mnt/ssd/etc/fstab"),
        ]),
    },
    StepRecord {
        title: "Finalizing the fstab Edit",
        description: &[
            Block::Paragraph(&[
                Text("Inside the nano editor, you will see a line for the root filesystem ("),
                Code("/"),
                Text("). It will have the old SD card's UUID."),
            ]),
            Block::Paragraph(&[
                Text("Carefully delete the old UUID and paste the "),
                Strong("new SSD partition's UUID"),
                Text(" you copied earlier. The line should look something like this:"),
            ]),
            Block::Paragraph(&[Code("UUID=...your-new-ssd-uuid-here...  /  ext4  errors=remount-ro  0  1")]),
            Block::Paragraph(&[
                Text("After editing, press "),
                Code("Ctrl+X"),
                Text(", then "),
                Code("Y"),
                Text(", then "),
                Code("Enter"),
                Text(" to save the file and exit nano."),
            ]),
        ],
        command: None,
        warning: Some(&[
            Text("This step is crucial for the SSD to be bootable. Ensure you are editing "),
            Code("/mnt/ssd/etc/fstab"),
            Text(" and not the system's live "),
            Code("/etc/fstab"),
            Text("."),
        ]),
        note: None,
    },
    StepRecord {
        title: "Unmount and Shutdown",
        description: &[Block::Paragraph(&[Text("The hard part is over! Now, unmount the SSD partition.")])],
        command: Some("sudo umount /mnt/ssd"),
        warning: None,
        note: None,
    },
    StepRecord {
        title: "Boot from SSD",
        description: &[
            Block::Paragraph(&[Text("Finally, shut down your Jetson completely.")]),
            Block::Paragraph(&[
                Strong("Important:"),
                Text(" Once it's powered off, remove the original SD card."),
            ]),
            Block::Paragraph(&[
                Text(
                    "Now, power on your Jetson. It should automatically boot from the newly cloned SSD! You can verify this by running ",
                ),
                Code("lsblk"),
                Text(" again; you will see that the root mount point "),
                Code("/"),
                Text(" is on your SSD device."),
            ]),
            Block::Paragraph(&[Text("Congratulations on your successful OS migration!")]),
        ],
        command: None,
        warning: None,
        note: Some(&[Text(
            "The first boot from the SSD might be slightly longer as the system adjusts. Enjoy the performance boost!",
        )]),
    },
];
