#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkey::SecretTable;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }

    // Table from the first three bytes; a zero modulus must be rejected, never divided by.
    let entries = [data[0], data[1], data[2]];
    let table = match SecretTable::try_from(entries) {
        Ok(table) => table,
        Err(_) => {
            assert_eq!(data[0], 0);
            return;
        }
    };

    // Operand from the next two; the primitive is total for every word.
    let first = seedkey::transform(data[3], data[4], &table);
    let second = seedkey::transform(data[3], data[4], &table);

    assert_eq!(first, second, "transform is not deterministic");
});
