use gudang_ledger::{TransactionKind, TransactionRecord};

use crate::money::format_rupiah;

const WIDTH: usize = 40;
const SHOP_NAME: &str = "GUDANG MAJU SEJAHTRA";
const SHOP_ADDRESS: &str = "Jl. Otomotif Raya No. 123, Jakarta";
const FOOTER_THANKS: &str = "Terima kasih atas kunjungan Anda!";
const FOOTER_NO_RETURNS: &str = "Barang yang sudah dibeli tidak dapat dikembalikan.";

/// Render a transaction as a fixed-width text receipt for printing.
pub fn render_receipt(record: &TransactionRecord) -> String {
    let mut out = String::new();

    push_centered(&mut out, SHOP_NAME);
    push_centered(&mut out, SHOP_ADDRESS);
    push_rule(&mut out);

    out.push_str(&format!("No. Transaksi: {}\n", record.id));
    out.push_str(&format!(
        "Tanggal: {}\n",
        record.timestamp.format("%d-%m-%Y %H:%M UTC")
    ));
    push_rule(&mut out);

    let direction = match record.kind {
        TransactionKind::In => "MASUK",
        TransactionKind::Out => "KELUAR",
    };
    push_centered(&mut out, &format!("STRUK TRANSAKSI {direction}"));
    out.push('\n');

    for item in &record.items {
        out.push_str(&item.part_name);
        out.push('\n');
        push_two_columns(
            &mut out,
            &format!("  {} x {}", item.quantity, format_rupiah(item.price)),
            &format_rupiah(item.subtotal()),
        );
    }

    push_rule(&mut out);
    push_two_columns(&mut out, "TOTAL", &format_rupiah(record.total_amount));

    if let Some(notes) = &record.notes {
        push_rule(&mut out);
        out.push_str(&format!("Catatan: {notes}\n"));
    }

    push_rule(&mut out);
    push_centered(&mut out, FOOTER_THANKS);
    push_centered(&mut out, FOOTER_NO_RETURNS);

    out
}

fn push_rule(out: &mut String) {
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
}

fn push_centered(out: &mut String, text: &str) {
    let pad = WIDTH.saturating_sub(text.chars().count()) / 2;
    out.push_str(&" ".repeat(pad));
    out.push_str(text);
    out.push('\n');
}

fn push_two_columns(out: &mut String, left: &str, right: &str) {
    let used = left.chars().count() + right.chars().count();
    let gap = WIDTH.saturating_sub(used).max(1);
    out.push_str(left);
    out.push_str(&" ".repeat(gap));
    out.push_str(right);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_core::PartId;
    use gudang_ledger::TransactionItem;

    fn sale() -> TransactionRecord {
        TransactionRecord::new(
            TransactionKind::Out,
            vec![
                TransactionItem {
                    part_id: PartId::new(),
                    part_name: "Brake Pads Front Set".to_string(),
                    quantity: 2,
                    price: 375_000,
                },
                TransactionItem {
                    part_id: PartId::new(),
                    part_name: "Chain Lube Motul C2+".to_string(),
                    quantity: 1,
                    price: 187_500,
                },
            ],
            "outgoing/sale transaction",
        )
        .unwrap()
    }

    #[test]
    fn receipt_carries_header_items_total_and_notes() {
        let record = sale();
        let receipt = render_receipt(&record);

        assert!(receipt.contains(SHOP_NAME));
        assert!(receipt.contains("STRUK TRANSAKSI KELUAR"));
        assert!(receipt.contains(&record.id.to_string()));
        assert!(receipt.contains("Brake Pads Front Set"));
        assert!(receipt.contains("2 x Rp 375.000"));
        assert!(receipt.contains("Rp 750.000"));
        assert!(receipt.contains("Rp 937.500")); // total
        assert!(receipt.contains("Catatan: outgoing/sale transaction"));
        assert!(receipt.contains(FOOTER_THANKS));
    }

    #[test]
    fn incoming_records_print_the_masuk_title() {
        let mut record = sale();
        record.kind = TransactionKind::In;
        assert!(render_receipt(&record).contains("STRUK TRANSAKSI MASUK"));
    }
}
